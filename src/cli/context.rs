use std::path::{Path, PathBuf};

use crate::audit::AuditLog;
use crate::config::AppConfig;
use crate::store::{ReportStore, StoreOptions};

/// Resolved settings shared by the command handlers.
pub struct Context {
    pub config: AppConfig,
    pub store_path: PathBuf,
}

impl Context {
    pub fn new(config: AppConfig, store_override: Option<&Path>) -> Self {
        let store_path = store_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(config.store_path()));
        Self { config, store_path }
    }

    pub fn open_store(&self) -> ReportStore {
        let options = StoreOptions {
            path: self.store_path.clone(),
            atomic_writes: self.config.atomic_writes(),
            actor: self.config.actor().to_string(),
        };
        ReportStore::open(options, Box::new(AuditLog::new(self.config.audit_path())))
    }
}
