use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

use super::{lookup_name, table};
use crate::models::{Carrier, Order, Shipment};
use crate::utils::formatting::format_days;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CarrierPerformance {
    pub carrier_id: String,
    pub name: String,
    pub average_days: f64,
    pub deliveries: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliverySummary {
    pub average_days: f64,
    pub completed: usize,
    /// Ordered by carrier id.
    pub carriers: Vec<CarrierPerformance>,
}

/// Join delivered shipments to their orders. `None` when no shipment
/// could be matched.
pub fn summarize(
    shipments: &[Shipment],
    orders: &[Order],
    carriers: &[Carrier],
) -> Option<DeliverySummary> {
    let mut ordered_at: HashMap<&str, i64> = HashMap::new();
    for order in orders {
        ordered_at.entry(order.id.as_str()).or_insert(order.ordered_at);
    }

    let mut total_days = 0.0;
    let mut completed = 0usize;
    let mut per_carrier: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for shipment in shipments.iter().filter(|s| s.is_delivered()) {
        let Some(&start) = ordered_at.get(shipment.order_id.as_str()) else {
            continue;
        };
        let days = (shipment.delivered_at as f64 - start as f64) / SECONDS_PER_DAY;
        total_days += days;
        completed += 1;

        let entry = per_carrier.entry(shipment.carrier_id.as_str()).or_insert((0.0, 0));
        entry.0 += days;
        entry.1 += 1;
    }

    if completed == 0 {
        return None;
    }

    let by_carrier = per_carrier
        .into_iter()
        .map(|(id, (days, count))| CarrierPerformance {
            carrier_id: id.to_string(),
            name: lookup_name(carriers.iter().find(|c| c.id == id).map(|c| c.name.as_str())),
            average_days: days / count as f64,
            deliveries: count,
        })
        .collect();

    Some(DeliverySummary {
        average_days: total_days / completed as f64,
        completed,
        carriers: by_carrier,
    })
}

pub fn render(summary: Option<&DeliverySummary>) -> String {
    let mut out = String::from("\t\t=== ANÁLISIS DE TIEMPOS DE ENTREGA ===\n\n");
    let Some(summary) = summary else {
        out.push_str("No hay entregas completadas para analizar.\n");
        return out;
    };

    let _ = writeln!(out, "Tiempo promedio de entrega: {}", format_days(summary.average_days));
    let _ = writeln!(out, "Entregas completadas: {}\n", summary.completed);

    out.push_str("=== RENDIMIENTO POR TRANSPORTISTA ===\n");
    let mut rows = vec![vec![
        "ID".to_string(),
        "Nombre".to_string(),
        "Tiempo Promedio".to_string(),
        "Entregas".to_string(),
    ]];
    rows.extend(summary.carriers.iter().map(|c| {
        vec![
            c.carrier_id.clone(),
            c.name.clone(),
            format_days(c.average_days),
            c.deliveries.to_string(),
        ]
    }));
    out.push_str(&table::render(&rows));
    out.push('\n');
    out
}
