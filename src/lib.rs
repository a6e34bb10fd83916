//! Report store for the logistics system.
//!
//! Reports are kept in a single binary file that is rewritten on every
//! change (see [`store::codec`] for the layout). Identifiers come from the
//! fixed pool 3800-3850, so at most 51 reports can be live at once.
//! The aggregators in [`reporting`] turn order, shipment, product,
//! warehouse and supplier snapshots into report content.

pub mod audit;
pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod models;
pub mod reporting;
pub mod store;
pub mod utils;

pub use errors::ReportError;
pub use models::{Report, ReportKind};
pub use store::{ReportStore, StoreOptions};
