use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::AuditSink;
use crate::errors::ReportError;

/// Appends one line per event to a plain-text log file.
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(actor: &str, category: &str, message: &str) -> String {
        format!(
            "[{}] {} | {} | {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            actor,
            category,
            message
        )
    }
}

impl AuditSink for AuditLog {
    fn record(&self, actor: &str, category: &str, message: &str) -> Result<(), ReportError> {
        let line = Self::format_line(actor, category, message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ReportError::Audit(format!("cannot open {}: {}", self.path.display(), e))
            })?;
        file.write_all(line.as_bytes())
            .map_err(|e| {
                ReportError::Audit(format!("cannot write {}: {}", self.path.display(), e))
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_audit_log_appends_lines() {
        let dir = TempDir::new().unwrap();
        let log = AuditLog::new(dir.path().join("bitacora.log"));

        log.record("ana", "REPORTES", "Reporte creado - ID: 3800 Tipo: VENTAS").unwrap();
        log.record("ana", "REPORTES", "Reporte eliminado - ID: 3800").unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("ana | REPORTES | Reporte creado - ID: 3800 Tipo: VENTAS"));
        assert!(lines[1].contains("Reporte eliminado - ID: 3800"));
    }

    #[test]
    fn test_audit_log_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let log = AuditLog::new(dir.path().join("missing").join("bitacora.log"));
        let err = log.record("ana", "REPORTES", "x").unwrap_err();
        assert!(matches!(err, ReportError::Audit(_)));
    }
}
