//! The audit collaborator the store reports its mutations to.
//!
//! Recording is best-effort: the store logs a failed `record` call and
//! carries on with the operation that triggered it.

pub mod audit_log;
pub mod memory;

pub use audit_log::AuditLog;
pub use memory::MemoryAudit;

use crate::errors::ReportError;
use serde::{Deserialize, Serialize};

/// Category attached to every event the report store emits.
pub const REPORTS_CATEGORY: &str = "REPORTES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub actor: String,
    pub category: String,
    pub message: String,
}

pub trait AuditSink: Send {
    fn record(&self, actor: &str, category: &str, message: &str) -> Result<(), ReportError>;
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudit;

impl AuditSink for NullAudit {
    fn record(&self, _actor: &str, _category: &str, _message: &str) -> Result<(), ReportError> {
        Ok(())
    }
}
