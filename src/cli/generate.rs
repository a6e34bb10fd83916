use std::path::PathBuf;

use console::style;
use tracing::info;

use super::commands::{GenerateArgs, GenerateKind};
use super::context::Context;
use crate::data::Dataset;
use crate::errors::ReportError;
use crate::reporting::{Pacing, ReportGenerator};

pub fn handle_generate(ctx: &Context, args: GenerateArgs) -> Result<(), ReportError> {
    let data_dir = args
        .data
        .unwrap_or_else(|| PathBuf::from(ctx.config.data_dir()));
    info!(kind = ?args.kind, data = %data_dir.display(), "Generating report");

    let dataset = Dataset::load(&data_dir)?;
    let mut store = ctx.open_store();

    let report = {
        let pacing = Pacing::from_millis(ctx.config.pacing_ms());
        let mut generator = ReportGenerator::new(&mut store).with_pacing(pacing);
        match args.kind {
            GenerateKind::Sales => generator.sales(&dataset.orders, &dataset.products)?,
            GenerateKind::Delivery => {
                generator.delivery_times(&dataset.shipments, &dataset.orders, &dataset.carriers)?
            }
            GenerateKind::Inventory => generator.inventory(&dataset.products, &dataset.warehouses)?,
            GenerateKind::Suppliers => {
                generator.supplier_evaluation(&dataset.suppliers, &dataset.products)?
            }
        }
    };

    print!("{}", report.content);
    println!("\n{} {}", style("Reporte guardado con ID:").green(), report.id);
    store.close()
}
