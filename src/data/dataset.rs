use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::errors::ReportError;
use crate::models::{Carrier, Order, Product, Shipment, Supplier, Warehouse};

pub const ORDERS_FILE: &str = "orders.json";
pub const SHIPMENTS_FILE: &str = "shipments.json";
pub const PRODUCTS_FILE: &str = "products.json";
pub const WAREHOUSES_FILE: &str = "warehouses.json";
pub const SUPPLIERS_FILE: &str = "suppliers.json";
pub const CARRIERS_FILE: &str = "carriers.json";

/// Snapshots of every collection the aggregators read.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub shipments: Vec<Shipment>,
    pub products: Vec<Product>,
    pub warehouses: Vec<Warehouse>,
    pub suppliers: Vec<Supplier>,
    pub carriers: Vec<Carrier>,
}

impl Dataset {
    /// Load each collection from `<dir>/<name>.json`. Missing files are
    /// empty collections; unreadable or malformed files are errors.
    pub fn load(dir: &Path) -> Result<Self, ReportError> {
        if !dir.is_dir() {
            return Err(ReportError::InvalidInput(format!(
                "Data directory not found: {}",
                dir.display()
            )));
        }

        let dataset = Self {
            orders: load_collection(dir, ORDERS_FILE)?,
            shipments: load_collection(dir, SHIPMENTS_FILE)?,
            products: load_collection(dir, PRODUCTS_FILE)?,
            warehouses: load_collection(dir, WAREHOUSES_FILE)?,
            suppliers: load_collection(dir, SUPPLIERS_FILE)?,
            carriers: load_collection(dir, CARRIERS_FILE)?,
        };
        info!(
            dir = %dir.display(),
            orders = dataset.orders.len(),
            shipments = dataset.shipments.len(),
            products = dataset.products.len(),
            warehouses = dataset.warehouses.len(),
            suppliers = dataset.suppliers.len(),
            carriers = dataset.carriers.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }
}

fn load_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, ReportError> {
    let path = dir.join(file);
    if !path.exists() {
        debug!(path = %path.display(), "Collection file absent, using empty list");
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    serde_json::from_str(&content)
        .map_err(|e| ReportError::InvalidInput(format!("{}: {}", path.display(), e)))
}
