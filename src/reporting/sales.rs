use std::collections::HashMap;
use std::fmt::Write;

use super::{lookup_name, table};
use crate::models::{Order, Product};
use crate::utils::formatting::format_money;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub code: String,
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub total_sales: f64,
    /// Delivered orders; each one counts as one attended client.
    pub delivered_orders: usize,
    /// Best sellers first. Equal quantities keep first-sale order.
    pub products: Vec<ProductSales>,
}

pub fn summarize(orders: &[Order], products: &[Product]) -> SalesSummary {
    let mut total_sales = 0.0;
    let mut delivered_orders = 0;
    let mut quantities: Vec<(String, u64)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for order in orders.iter().filter(|o| o.is_delivered()) {
        delivered_orders += 1;
        for line in &order.lines {
            total_sales += line.subtotal();
            let slot = *slots.entry(line.product_code.as_str()).or_insert_with(|| {
                quantities.push((line.product_code.clone(), 0));
                quantities.len() - 1
            });
            quantities[slot].1 += u64::from(line.quantity);
        }
    }

    // sort_by is stable, so ties stay in first-appearance order
    quantities.sort_by(|a, b| b.1.cmp(&a.1));

    let ranked = quantities
        .into_iter()
        .map(|(code, quantity)| {
            let name = lookup_name(
                products
                    .iter()
                    .find(|p| p.code == code)
                    .map(|p| p.name.as_str()),
            );
            ProductSales { code, name, quantity }
        })
        .collect();

    SalesSummary {
        total_sales,
        delivered_orders,
        products: ranked,
    }
}

pub fn render(summary: &SalesSummary) -> String {
    let mut out = String::from("\t\t=== INFORME DE VENTAS ===\n\n");
    let _ = writeln!(out, "Total de ventas: {}", format_money(summary.total_sales));
    let _ = writeln!(out, "Clientes atendidos: {}", summary.delivered_orders);
    let _ = writeln!(out, "Pedidos completados: {}\n", summary.delivered_orders);

    out.push_str("=== PRODUCTOS MÁS VENDIDOS ===\n");
    let mut rows = vec![vec![
        "Producto".to_string(),
        "Cantidad Vendida".to_string(),
        "Nombre".to_string(),
    ]];
    rows.extend(
        summary
            .products
            .iter()
            .map(|p| vec![p.code.clone(), p.quantity.to_string(), p.name.clone()]),
    );
    out.push_str(&table::render(&rows));
    out.push('\n');
    out
}
