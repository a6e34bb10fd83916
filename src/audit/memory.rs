use std::sync::{Arc, Mutex};

use super::{AuditEvent, AuditSink};
use crate::errors::ReportError;

/// Keeps events in memory. Clones share the same event list.
#[derive(Debug, Default, Clone)]
pub struct MemoryAudit {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl MemoryAudit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AuditEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AuditSink for MemoryAudit {
    fn record(&self, actor: &str, category: &str, message: &str) -> Result<(), ReportError> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| ReportError::Audit("event list lock poisoned".into()))?;
        events.push(AuditEvent {
            actor: actor.to_string(),
            category: category.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_audit_clones_share_events() {
        let audit = MemoryAudit::new();
        let handle = audit.clone();
        audit.record("ana", "REPORTES", "hola").unwrap();
        let events = handle.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].actor, "ana");
        assert_eq!(events[0].message, "hola");
    }
}
