use bodega_reports::cli::{self, Commands, Context};
use bodega_reports::config;
use bodega_reports::errors::ReportError;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.classify().exit_code);
    }
}

fn run(cli: cli::Cli) -> Result<(), ReportError> {
    let context = || -> Result<Context, ReportError> {
        let config = config::load_or_default(cli.config.as_deref())?;
        Ok(Context::new(config, cli.store.as_deref()))
    };

    match cli.command {
        Commands::List(args) => cli::reports::handle_list(&context()?, args),
        Commands::Show(args) => cli::reports::handle_show(&context()?, args),
        Commands::Create(args) => cli::reports::handle_create(&context()?, args),
        Commands::Modify(args) => cli::reports::handle_modify(&context()?, args),
        Commands::Delete(args) => cli::reports::handle_delete(&context()?, args),
        Commands::Generate(args) => cli::generate::handle_generate(&context()?, args),
        Commands::Validate(args) => handle_validate(&args),
    }
}

fn handle_validate(args: &cli::commands::ValidateArgs) -> Result<(), ReportError> {
    let _config = config::parse_config(&args.path)?;
    println!("Configuration is valid: {}", args.path.display());
    Ok(())
}
