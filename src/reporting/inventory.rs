use std::fmt::Write;

use super::table;
use crate::models::{Product, Warehouse};

#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub total_products: usize,
    /// Products with `stock < minimum_stock`, in catalogue order.
    pub below_minimum: Vec<Product>,
    pub warehouses: Vec<Warehouse>,
}

pub fn summarize(products: &[Product], warehouses: &[Warehouse]) -> InventorySummary {
    InventorySummary {
        total_products: products.len(),
        below_minimum: products.iter().filter(|p| p.is_below_minimum()).cloned().collect(),
        warehouses: warehouses.to_vec(),
    }
}

pub fn render(summary: &InventorySummary) -> String {
    let mut out = String::from("\t\t=== REPORTE DE INVENTARIO ===\n\n");
    let _ = writeln!(out, "Total de productos: {}", summary.total_products);
    let _ = writeln!(out, "Productos bajo stock mínimo: {}\n", summary.below_minimum.len());

    out.push_str("=== PRODUCTOS BAJO STOCK MÍNIMO ===\n");
    if summary.below_minimum.is_empty() {
        out.push_str("No hay productos bajo stock mínimo.\n");
    } else {
        let mut rows = vec![vec![
            "Código".to_string(),
            "Nombre".to_string(),
            "Stock Actual".to_string(),
            "Stock Mínimo".to_string(),
        ]];
        rows.extend(summary.below_minimum.iter().map(|p| {
            vec![
                p.code.clone(),
                p.name.clone(),
                p.stock.to_string(),
                p.minimum_stock.to_string(),
            ]
        }));
        out.push_str(&table::render(&rows));
        out.push('\n');
    }

    if !summary.warehouses.is_empty() {
        out.push_str("\n=== DISTRIBUCIÓN POR ALMACÉN ===\n");
        for warehouse in &summary.warehouses {
            let _ = writeln!(out, "\nAlmacén: {} - {}", warehouse.id, warehouse.address);
            let _ = writeln!(out, "Capacidad: {} m²", warehouse.capacity);
            let _ = writeln!(out, "Estado: {}", warehouse.status);
        }
    }
    out
}
