//! Aggregations over entity snapshots and the text they render to.
//!
//! Each aggregator has a pure `summarize` step returning typed metrics and a
//! `render` step producing report content. [`ReportGenerator`] runs both and
//! saves the result through the store.

pub mod delivery;
pub mod generator;
pub mod inventory;
pub mod listing;
pub mod pacing;
pub mod sales;
pub mod suppliers;
pub mod table;

pub use generator::ReportGenerator;
pub use listing::render_listing;
pub use pacing::Pacing;

/// Shown in place of a product or carrier name that cannot be resolved.
pub const NOT_FOUND_NAME: &str = "No encontrado";

fn lookup_name(found: Option<&str>) -> String {
    found.unwrap_or(NOT_FOUND_NAME).to_string()
}
