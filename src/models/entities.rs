//! Read-only snapshots of the records owned by the other subsystems
//! (orders, shipments, products, warehouses, suppliers, carriers).

use serde::{Deserialize, Serialize};

/// Status values that mark an order or shipment as delivered.
pub const DELIVERED_STATUSES: [&str; 2] = ["delivered", "entregado"];

fn is_delivered_status(status: &str) -> bool {
    DELIVERED_STATUSES.contains(&status)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_code: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub client_id: String,
    pub status: String,
    /// Seconds since the Unix epoch.
    pub ordered_at: i64,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn is_delivered(&self) -> bool {
        is_delivered_status(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub order_id: String,
    pub carrier_id: String,
    pub status: String,
    /// Seconds since the Unix epoch; meaningful once delivered.
    #[serde(default)]
    pub delivered_at: i64,
}

impl Shipment {
    pub fn is_delivered(&self) -> bool {
        is_delivered_status(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub stock: i64,
    pub minimum_stock: i64,
}

impl Product {
    pub fn is_below_minimum(&self) -> bool {
        self.stock < self.minimum_stock
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,
    pub address: String,
    pub capacity: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub id: String,
    pub name: String,
}
