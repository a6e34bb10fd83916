use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Identifier pool exhausted: all report ids 3800-3850 are in use")]
    AllocationExhausted,

    #[error("Report not found: {0}")]
    NotFound(String),

    #[error("Corrupt report data: {0}")]
    CorruptData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Audit error: {0}")]
    Audit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
