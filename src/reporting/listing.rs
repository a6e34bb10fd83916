use super::table;
use crate::models::Report;
use crate::utils::truncation::summarize_text;

/// Characters of content shown per report in the listing.
pub const SUMMARY_CHARS: usize = 30;

pub const EMPTY_LISTING: &str = "No hay reportes registrados.";

/// Tabular overview of the stored reports, one row per report.
pub fn render_listing(reports: &[Report]) -> String {
    if reports.is_empty() {
        return format!("{}\n", EMPTY_LISTING);
    }

    let mut rows = vec![vec![
        "ID".to_string(),
        "Tipo".to_string(),
        "Fecha".to_string(),
        "Contenido (resumen)".to_string(),
    ]];
    rows.extend(reports.iter().map(|r| {
        vec![
            r.id.clone(),
            r.report_type.clone(),
            r.formatted_date(),
            summarize_text(&r.content, SUMMARY_CHARS),
        ]
    }));
    table::render(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing() {
        assert_eq!(render_listing(&[]), "No hay reportes registrados.\n");
    }

    #[test]
    fn test_listing_rows() {
        let reports = vec![
            Report::new("3800", "VENTAS", 0, "corto"),
            Report::new("3801", "INVENTARIO", 0, "x".repeat(40)),
        ];
        let text = render_listing(&reports);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID    Tipo        Fecha"));
        assert!(lines[1].starts_with("3800  VENTAS"));
        assert!(lines[1].contains("corto"));
        assert!(lines[2].contains(&format!("{}...", "x".repeat(30))));
    }
}
