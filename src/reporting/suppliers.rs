use std::fmt::Write;

use super::table;
use crate::models::{Product, Supplier};

pub fn render(suppliers: &[Supplier], products: &[Product]) -> String {
    let mut out = String::from("\t\t=== EVALUACIÓN DE PROVEEDORES ===\n\n");
    let _ = writeln!(out, "Total de proveedores: {}", suppliers.len());
    let _ = writeln!(out, "Total de productos: {}\n", products.len());

    out.push_str("=== LISTADO DE PROVEEDORES ===\n");
    let mut rows = vec![vec!["ID".to_string(), "Nombre".to_string(), "Teléfono".to_string()]];
    rows.extend(
        suppliers
            .iter()
            .map(|s| vec![s.id.clone(), s.name.clone(), s.phone.clone()]),
    );
    out.push_str(&table::render(&rows));
    out.push('\n');
    out
}
