pub mod codec;
pub mod file;
pub mod ids;
pub mod reports;

pub use reports::{ReportStore, StoreOptions};
