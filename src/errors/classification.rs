use super::types::ReportError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Process exit code the binary reports for this error.
    pub exit_code: i32,
}

impl ReportError {
    /// Classify this error to determine its type and the exit code the CLI uses for it.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            ReportError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            ReportError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 2,
            },
            ReportError::NotFound(_) => ErrorClassification {
                error_type: "NotFoundError",
                exit_code: 3,
            },
            ReportError::AllocationExhausted => ErrorClassification {
                error_type: "AllocationExhaustedError",
                exit_code: 4,
            },
            ReportError::CorruptData(_) => ErrorClassification {
                error_type: "CorruptDataError",
                exit_code: 5,
            },
            ReportError::InvalidInput(_) => ErrorClassification {
                error_type: "InvalidInputError",
                exit_code: 1,
            },
            ReportError::Audit(_) => ErrorClassification {
                error_type: "AuditError",
                exit_code: 1,
            },
            ReportError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            ReportError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
        }
    }
}
