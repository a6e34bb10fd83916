use std::path::Path;
use crate::errors::ReportError;
use super::types::AppConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub fn parse_config(path: &Path) -> Result<AppConfig, ReportError> {
    if !path.exists() {
        return Err(ReportError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(ReportError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<AppConfig, ReportError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    // An empty document is a config with every default.
    if yaml.is_null() {
        return Ok(AppConfig::default());
    }

    validate_schema(&yaml)?;

    let config: AppConfig = serde_yaml::from_value(yaml)?;

    validate_conflicts(&config)?;

    Ok(config)
}

/// Parse `path` when given, otherwise use the built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig, ReportError> {
    match path {
        Some(path) => parse_config(path),
        None => {
            debug!("No config file given, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), ReportError> {
    // Convert YAML value to JSON for schema validation
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| ReportError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| ReportError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| ReportError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only: typed parsing below is the hard check
        for e in errors {
            warn!(
                validation_error = %format!("{} at {}", e, e.instance_path),
                "Config schema warning"
            );
        }
    }

    Ok(())
}

/// Detect semantic conflicts in the parsed configuration.
fn validate_conflicts(config: &AppConfig) -> Result<(), ReportError> {
    if config.store_path().is_empty() {
        return Err(ReportError::Config("store.path must not be empty".into()));
    }

    if Path::new(config.store_path()) == Path::new(config.audit_path()) {
        return Err(ReportError::Config(format!(
            "store.path and audit.path both point to '{}'",
            config.store_path()
        )));
    }

    if config.actor().trim().is_empty() {
        warn!("Audit actor is blank; events will be recorded without a user name");
    }

    Ok(())
}
