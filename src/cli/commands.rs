use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "bodega-reports",
    version,
    long_version = LONG_VERSION,
    about = "Generate, store and manage logistics reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Report file (overrides store.path)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored reports
    List(ListArgs),
    /// Print the full content of a report
    Show(ShowArgs),
    /// Store a report with the given type and content
    Create(CreateArgs),
    /// Replace the content of a report
    Modify(ModifyArgs),
    /// Delete a report
    Delete(DeleteArgs),
    /// Aggregate entity snapshots into a new report
    Generate(GenerateArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Report ID
    pub id: String,
}

#[derive(Args, Clone)]
pub struct ContentArgs {
    /// Report content
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read report content from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Report type tag, e.g. VENTAS
    #[arg(short = 't', long = "type")]
    pub report_type: String,

    #[command(flatten)]
    pub body: ContentArgs,
}

#[derive(Args, Clone)]
pub struct ModifyArgs {
    /// Report ID
    pub id: String,

    #[command(flatten)]
    pub body: ContentArgs,
}

#[derive(Args, Clone)]
pub struct DeleteArgs {
    /// Report ID
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerateKind {
    /// Sales report over delivered orders
    Sales,
    /// Delivery-time analysis per carrier
    Delivery,
    /// Products under minimum stock and warehouse overview
    Inventory,
    /// Supplier listing
    Suppliers,
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Which report to generate
    #[arg(value_enum)]
    pub kind: GenerateKind,

    /// Directory with the entity JSON snapshots (overrides data.directory)
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}
