use tracing::info;

use super::pacing::Pacing;
use super::{delivery, inventory, sales, suppliers};
use crate::errors::ReportError;
use crate::models::{Carrier, Order, Product, Report, ReportKind, Shipment, Supplier, Warehouse};
use crate::store::ReportStore;

/// Runs the aggregations and saves each result as a new report.
pub struct ReportGenerator<'a> {
    store: &'a mut ReportStore,
    pacing: Pacing,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(store: &'a mut ReportStore) -> Self {
        Self {
            store,
            pacing: Pacing::disabled(),
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn sales(&mut self, orders: &[Order], products: &[Product]) -> Result<Report, ReportError> {
        self.pacing.wait(ReportKind::Ventas.progress_message());
        let summary = sales::summarize(orders, products);
        info!(
            delivered_orders = summary.delivered_orders,
            products = summary.products.len(),
            "Sales aggregated"
        );
        self.save(ReportKind::Ventas, sales::render(&summary))
    }

    pub fn delivery_times(
        &mut self,
        shipments: &[Shipment],
        orders: &[Order],
        carriers: &[Carrier],
    ) -> Result<Report, ReportError> {
        self.pacing.wait(ReportKind::TiemposEntrega.progress_message());
        let summary = delivery::summarize(shipments, orders, carriers);
        info!(
            completed = summary.as_ref().map_or(0, |s| s.completed),
            "Delivery times aggregated"
        );
        self.save(ReportKind::TiemposEntrega, delivery::render(summary.as_ref()))
    }

    pub fn inventory(
        &mut self,
        products: &[Product],
        warehouses: &[Warehouse],
    ) -> Result<Report, ReportError> {
        self.pacing.wait(ReportKind::Inventario.progress_message());
        let summary = inventory::summarize(products, warehouses);
        info!(
            products = summary.total_products,
            below_minimum = summary.below_minimum.len(),
            "Inventory aggregated"
        );
        self.save(ReportKind::Inventario, inventory::render(&summary))
    }

    pub fn supplier_evaluation(
        &mut self,
        suppliers: &[Supplier],
        products: &[Product],
    ) -> Result<Report, ReportError> {
        self.pacing.wait(ReportKind::EvaluacionProveedores.progress_message());
        info!(suppliers = suppliers.len(), "Suppliers evaluated");
        self.save(ReportKind::EvaluacionProveedores, suppliers::render(suppliers, products))
    }

    fn save(&mut self, kind: ReportKind, content: String) -> Result<Report, ReportError> {
        let report = self.store.insert(kind.as_str(), &content)?;
        self.store
            .record_event(&format!("{} - ID: {}", kind.audit_label(), report.id));
        Ok(report)
    }
}
