use serde::{Deserialize, Serialize};

pub const DEFAULT_STORE_PATH: &str = "reportes.bin";
pub const DEFAULT_AUDIT_PATH: &str = "bitacora.log";
pub const DEFAULT_ACTOR: &str = "sistema";
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    pub store: Option<StoreConfig>,
    pub audit: Option<AuditConfig>,
    pub reporting: Option<ReportingConfig>,
    pub data: Option<DataConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub atomic_writes: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AuditConfig {
    pub path: Option<String>,
    pub actor: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportingConfig {
    /// Length of the processing spinner before each aggregation; 0 disables it.
    pub pacing_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DataConfig {
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn store_path(&self) -> &str {
        self.store
            .as_ref()
            .and_then(|s| s.path.as_deref())
            .unwrap_or(DEFAULT_STORE_PATH)
    }

    pub fn atomic_writes(&self) -> bool {
        self.store.as_ref().and_then(|s| s.atomic_writes).unwrap_or(false)
    }

    pub fn audit_path(&self) -> &str {
        self.audit
            .as_ref()
            .and_then(|a| a.path.as_deref())
            .unwrap_or(DEFAULT_AUDIT_PATH)
    }

    pub fn actor(&self) -> &str {
        self.audit
            .as_ref()
            .and_then(|a| a.actor.as_deref())
            .unwrap_or(DEFAULT_ACTOR)
    }

    pub fn pacing_ms(&self) -> u64 {
        self.reporting.as_ref().and_then(|r| r.pacing_ms).unwrap_or(0)
    }

    pub fn data_dir(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|d| d.directory.as_deref())
            .unwrap_or(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store_path(), "reportes.bin");
        assert!(!config.atomic_writes());
        assert_eq!(config.audit_path(), "bitacora.log");
        assert_eq!(config.actor(), "sistema");
        assert_eq!(config.pacing_ms(), 0);
        assert_eq!(config.data_dir(), "./data");
    }

    #[test]
    fn test_partial_sections_fall_back() {
        let config: AppConfig =
            serde_yaml::from_str("store:\n  atomic_writes: true\naudit:\n  actor: ana\n").unwrap();
        assert!(config.atomic_writes());
        assert_eq!(config.store_path(), "reportes.bin");
        assert_eq!(config.actor(), "ana");
        assert_eq!(config.audit_path(), "bitacora.log");
    }
}
