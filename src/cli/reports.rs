use console::style;
use tracing::info;

use super::commands::{ContentArgs, CreateArgs, DeleteArgs, ListArgs, ModifyArgs, ShowArgs};
use super::context::Context;
use crate::errors::ReportError;
use crate::reporting::render_listing;

pub fn handle_list(ctx: &Context, args: ListArgs) -> Result<(), ReportError> {
    let store = ctx.open_store();
    if args.json {
        println!("{}", serde_json::to_string_pretty(store.list())?);
    } else {
        println!("{}", style("=== LISTA DE REPORTES ===").bold());
        print!("{}", render_listing(store.list()));
    }
    store.close()
}

pub fn handle_show(ctx: &Context, args: ShowArgs) -> Result<(), ReportError> {
    let store = ctx.open_store();
    let report = store
        .get(&args.id)
        .ok_or_else(|| ReportError::NotFound(args.id.clone()))?;
    println!(
        "{} {}  {}  {}",
        style("ID").bold(),
        report.id,
        report.report_type,
        report.formatted_date()
    );
    print!("{}", report.content);
    Ok(())
}

pub fn handle_create(ctx: &Context, args: CreateArgs) -> Result<(), ReportError> {
    let report_type = args.report_type.trim();
    if report_type.is_empty() {
        return Err(ReportError::InvalidInput("report type must not be empty".into()));
    }
    let content = read_content(&args.body)?;

    let mut store = ctx.open_store();
    let report = store.create(report_type, &content)?;
    println!("{} {}", style("Reporte guardado con ID:").green(), report.id);
    store.close()
}

pub fn handle_modify(ctx: &Context, args: ModifyArgs) -> Result<(), ReportError> {
    let content = read_content(&args.body)?;
    let mut store = ctx.open_store();
    store.modify(&args.id, &content)?;
    println!("{}", style("Reporte modificado exitosamente!").green());
    store.close()
}

pub fn handle_delete(ctx: &Context, args: DeleteArgs) -> Result<(), ReportError> {
    let mut store = ctx.open_store();
    store.delete(&args.id)?;
    info!(id = %args.id, remaining = store.len(), "Delete finished");
    println!("{}", style("Reporte eliminado exitosamente!").green());
    store.close()
}

fn read_content(body: &ContentArgs) -> Result<String, ReportError> {
    match (&body.content, &body.file) {
        (Some(content), _) => Ok(content.clone()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => Err(ReportError::InvalidInput(
            "report content is required (--content or --file)".into(),
        )),
    }
}
