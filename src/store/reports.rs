use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, error, info, warn};

use super::{codec, file, ids};
use crate::audit::{AuditSink, REPORTS_CATEGORY};
use crate::errors::ReportError;
use crate::models::Report;

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub path: PathBuf,
    /// Write through a temp file and rename instead of truncating in place.
    pub atomic_writes: bool,
    /// Name recorded as the actor of every audit event.
    pub actor: String,
}

impl StoreOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_writes: false,
            actor: "sistema".to_string(),
        }
    }
}

/// Owns the report list and keeps the backing file in sync with it.
///
/// Every mutation rewrites the whole file. The store assumes it is the
/// only writer of that file.
pub struct ReportStore {
    options: StoreOptions,
    audit: Box<dyn AuditSink>,
    reports: Vec<Report>,
    /// Set when the last write failed and memory is ahead of the file.
    dirty: bool,
}

impl ReportStore {
    /// Open the store at `options.path`, loading whatever the file holds.
    /// A missing or undecodable file yields an empty store.
    pub fn open(options: StoreOptions, audit: Box<dyn AuditSink>) -> Self {
        let reports = load(&options.path);
        Self {
            options,
            audit,
            reports,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.options.path
    }

    pub fn list(&self) -> &[Report] {
        &self.reports
    }

    pub fn get(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Whether the in-memory list has changes the file is missing.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn create(&mut self, report_type: &str, content: &str) -> Result<Report, ReportError> {
        let report = self.insert(report_type, content)?;
        self.record_event(&format!(
            "Reporte creado - ID: {} Tipo: {}",
            report.id, report.report_type
        ));
        Ok(report)
    }

    /// Allocate, append and persist without emitting an audit event.
    pub(crate) fn insert(
        &mut self,
        report_type: &str,
        content: &str,
    ) -> Result<Report, ReportError> {
        let id = ids::allocate(self.reports.iter().map(|r| r.id.as_str()))?;
        let report = Report::new(id, report_type, Utc::now().timestamp(), content);

        self.reports.push(report.clone());
        self.persist()?;

        info!(id = %report.id, report_type = %report.report_type, "Report created");
        Ok(report)
    }

    pub fn modify(&mut self, id: &str, new_content: &str) -> Result<(), ReportError> {
        let report = self
            .reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ReportError::NotFound(id.to_string()))?;
        report.content = new_content.to_string();
        report.generated_at = Utc::now().timestamp();

        self.persist()?;
        info!(id = %id, "Report modified");
        self.record_event(&format!("Reporte modificado - ID: {}", id));
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), ReportError> {
        let index = self
            .reports
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ReportError::NotFound(id.to_string()))?;
        self.reports.remove(index);

        self.persist()?;
        info!(id = %id, "Report deleted");
        self.record_event(&format!("Reporte eliminado - ID: {}", id));
        Ok(())
    }

    /// Send `message` to the audit collaborator. Failures are logged only.
    pub fn record_event(&self, message: &str) {
        if let Err(e) = self.audit.record(&self.options.actor, REPORTS_CATEGORY, message) {
            warn!(error = %e, message = %message, "Audit event could not be recorded");
        }
    }

    /// Retry a failed write, if any, and release the store.
    pub fn close(mut self) -> Result<(), ReportError> {
        if self.dirty {
            info!(path = %self.options.path.display(), "Flushing unsaved reports on close");
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<(), ReportError> {
        let bytes = codec::encode(&self.reports);
        let path = &self.options.path;
        let result = if self.options.atomic_writes {
            file::write_atomic(path, &bytes)
        } else {
            file::write_in_place(path, &bytes)
        };

        match result {
            Ok(()) => {
                self.dirty = false;
                debug!(
                    path = %path.display(),
                    reports = self.reports.len(),
                    bytes = bytes.len(),
                    "Report file written"
                );
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                error!(
                    path = %path.display(),
                    error = %e,
                    reports = self.reports.len(),
                    "Report file write failed; in-memory list no longer matches disk"
                );
                Err(ReportError::Io(e))
            }
        }
    }
}

fn load(path: &Path) -> Vec<Report> {
    let bytes = match file::read_file(path) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!(path = %path.display(), "No report file, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cannot read report file, starting empty");
            return Vec::new();
        }
    };

    match codec::decode(&bytes).and_then(|reports| check_ids(&reports).map(|()| reports)) {
        Ok(reports) => {
            info!(path = %path.display(), count = reports.len(), "Reports loaded");
            reports
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Report file is corrupt, starting empty");
            Vec::new()
        }
    }
}

/// A repeated id makes the file corrupt. Ids outside the pool are kept but
/// logged, since they can never be handed out again.
fn check_ids(reports: &[Report]) -> Result<(), ReportError> {
    let mut seen = HashSet::new();
    for report in reports {
        if !seen.insert(report.id.as_str()) {
            return Err(ReportError::CorruptData(format!(
                "report id {} appears more than once",
                report.id
            )));
        }
        if !ids::in_pool(&report.id) {
            warn!(id = %report.id, "Loaded report id is outside the identifier pool");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAudit;
    use tempfile::TempDir;

    fn open_in(dir: &TempDir) -> (ReportStore, MemoryAudit) {
        let audit = MemoryAudit::new();
        let mut options = StoreOptions::new(dir.path().join("reportes.bin"));
        options.actor = "ana".to_string();
        (ReportStore::open(options, Box::new(audit.clone())), audit)
    }

    #[test]
    fn test_check_ids_rejects_duplicates() {
        let reports = vec![
            Report::new("3800", "A", 0, ""),
            Report::new("3801", "B", 0, ""),
            Report::new("3800", "C", 0, ""),
        ];
        let err = check_ids(&reports).unwrap_err();
        assert!(matches!(err, ReportError::CorruptData(_)));
        assert!(check_ids(&reports[..2]).is_ok());
    }

    #[test]
    fn test_check_ids_keeps_ids_outside_pool() {
        assert!(check_ids(&[Report::new("17", "A", 0, "")]).is_ok());
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let (store, _) = open_in(&dir);
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = open_in(&dir);
        let a = store.create("VENTAS", "uno").unwrap();
        let b = store.create("INVENTARIO", "dos").unwrap();
        assert_eq!(a.id, "3800");
        assert_eq!(b.id, "3801");
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.list()[1].content, "dos");
    }

    #[test]
    fn test_create_persists_and_reloads() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = open_in(&dir);
        store.create("VENTAS", "Total de ventas: Q30.00").unwrap();
        let before = store.list().to_vec();
        drop(store);

        let (reopened, _) = open_in(&dir);
        assert_eq!(reopened.list(), before.as_slice());
    }

    #[test]
    fn test_create_records_audit_event() {
        let dir = TempDir::new().unwrap();
        let (mut store, audit) = open_in(&dir);
        store.create("VENTAS", "x").unwrap();
        let events = audit.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].actor, "ana");
        assert_eq!(events[0].category, "REPORTES");
        assert_eq!(events[0].message, "Reporte creado - ID: 3800 Tipo: VENTAS");
    }

    #[test]
    fn test_modify_replaces_content_and_timestamp() {
        let dir = TempDir::new().unwrap();
        let (mut store, audit) = open_in(&dir);
        store.create("VENTAS", "viejo").unwrap();
        store.reports[0].generated_at = 0;

        store.modify("3800", "nuevo").unwrap();
        let report = store.get("3800").unwrap();
        assert_eq!(report.content, "nuevo");
        assert!(report.generated_at > 0);
        assert_eq!(audit.events().last().unwrap().message, "Reporte modificado - ID: 3800");

        let (reopened, _) = open_in(&dir);
        assert_eq!(reopened.get("3800").unwrap().content, "nuevo");
    }

    #[test]
    fn test_modify_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (mut store, audit) = open_in(&dir);
        let err = store.modify("3800", "x").unwrap_err();
        assert!(matches!(err, ReportError::NotFound(id) if id == "3800"));
        assert!(audit.events().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_delete_frees_id_for_reuse() {
        let dir = TempDir::new().unwrap();
        let (mut store, audit) = open_in(&dir);
        store.create("A", "1").unwrap();
        store.create("B", "2").unwrap();
        store.delete("3800").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(audit.events().last().unwrap().message, "Reporte eliminado - ID: 3800");

        let again = store.create("C", "3").unwrap();
        assert_eq!(again.id, "3800");
        let order: Vec<&str> = store.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["3801", "3800"]);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = open_in(&dir);
        store.create("A", "1").unwrap();
        assert!(matches!(store.delete("3849"), Err(ReportError::NotFound(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("reportes.bin"), [1, 0, 0]).unwrap();
        let (store, _) = open_in(&dir);
        assert!(store.is_empty());
    }

    #[test]
    fn test_write_failure_marks_dirty_and_surfaces_io() {
        let dir = TempDir::new().unwrap();
        let audit = MemoryAudit::new();
        let options = StoreOptions::new(dir.path().join("missing").join("reportes.bin"));
        let mut store = ReportStore::open(options, Box::new(audit.clone()));

        let err = store.create("VENTAS", "x").unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
        assert!(store.is_dirty());
        assert_eq!(store.len(), 1);
        assert!(audit.events().is_empty());

        std::fs::create_dir(dir.path().join("missing")).unwrap();
        let path = store.path().to_path_buf();
        store.close().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_atomic_writes_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut options = StoreOptions::new(dir.path().join("reportes.bin"));
        options.atomic_writes = true;
        let mut store = ReportStore::open(options.clone(), Box::new(MemoryAudit::new()));
        store.create("VENTAS", "x").unwrap();
        drop(store);

        let reopened = ReportStore::open(options, Box::new(MemoryAudit::new()));
        assert_eq!(reopened.len(), 1);
    }
}
