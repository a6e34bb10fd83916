use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A persisted, identifier-tagged text artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    #[serde(rename = "type")]
    pub report_type: String,
    /// Seconds since the Unix epoch.
    pub generated_at: i64,
    pub content: String,
}

impl Report {
    pub fn new(
        id: impl Into<String>,
        report_type: impl Into<String>,
        generated_at: i64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            report_type: report_type.into(),
            generated_at,
            content: content.into(),
        }
    }

    /// Generation time as a UTC instant, `None` if the stored value is out of chrono's range.
    pub fn generated_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.generated_at, 0)
    }

    /// `%Y-%m-%d %H:%M:%S` in the local time zone, or the raw seconds when
    /// the timestamp cannot be represented.
    pub fn formatted_date(&self) -> String {
        match self.generated_at_utc() {
            Some(utc) => utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.generated_at.to_string(),
        }
    }
}

/// The report kinds produced by the aggregators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportKind {
    Ventas,
    TiemposEntrega,
    Inventario,
    EvaluacionProveedores,
}

impl ReportKind {
    /// The type tag stored in the report file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ventas => "VENTAS",
            Self::TiemposEntrega => "TIEMPOS_ENTREGA",
            Self::Inventario => "INVENTARIO",
            Self::EvaluacionProveedores => "EVALUACION_PROVEEDORES",
        }
    }

    /// Label used in the audit message once the report is saved.
    pub fn audit_label(&self) -> &'static str {
        match self {
            Self::Ventas => "Informe de ventas",
            Self::TiemposEntrega => "Análisis tiempos entrega",
            Self::Inventario => "Reporte inventario",
            Self::EvaluacionProveedores => "Evaluación proveedores",
        }
    }

    /// Message shown by the processing indicator.
    pub fn progress_message(&self) -> &'static str {
        match self {
            Self::Ventas => "Generando informe de ventas",
            Self::TiemposEntrega => "Analizando tiempos de entrega",
            Self::Inventario => "Generando reporte de inventario",
            Self::EvaluacionProveedores => "Evaluando proveedores",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_tags_are_distinct() {
        let tags = [
            ReportKind::Ventas.as_str(),
            ReportKind::TiemposEntrega.as_str(),
            ReportKind::Inventario.as_str(),
            ReportKind::EvaluacionProveedores.as_str(),
        ];
        let unique: std::collections::HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn test_report_kind_serialization_matches_tag() {
        let json = serde_json::to_string(&ReportKind::TiemposEntrega).unwrap();
        assert_eq!(json, "\"TIEMPOS_ENTREGA\"");
        assert_eq!(format!("{}", ReportKind::Inventario), "INVENTARIO");
    }

    #[test]
    fn test_report_serializes_type_field() {
        let report = Report::new("3800", "VENTAS", 0, "body");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["type"], "VENTAS");
        assert_eq!(value["id"], "3800");
    }

    #[test]
    fn test_generated_at_utc() {
        let report = Report::new("3800", "VENTAS", 86_400, "");
        let dt = report.generated_at_utc().unwrap();
        assert_eq!(dt.to_rfc3339(), "1970-01-02T00:00:00+00:00");
        assert_eq!(report.formatted_date().len(), "1970-01-02 00:00:00".len());
    }

    #[test]
    fn test_out_of_range_timestamp_formats_as_seconds() {
        let report = Report::new("3800", "VENTAS", i64::MAX, "");
        assert!(report.generated_at_utc().is_none());
        assert_eq!(report.formatted_date(), i64::MAX.to_string());
    }
}
