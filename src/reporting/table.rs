//! Plain-text tables with left-aligned, space-padded columns.

/// Returned by [`render`] when there are no rows at all.
pub const NO_DATA: &str = "No hay datos para mostrar";

/// Render `rows` (first row is the header) as aligned text.
///
/// Each column is as wide as its longest cell plus two spaces; every row,
/// including the last, ends with `\n`. Widths are counted in characters.
pub fn render<R, S>(rows: &[R]) -> String
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    if rows.is_empty() {
        return NO_DATA.to_string();
    }

    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        let cells = row.as_ref();
        if widths.len() < cells.len() {
            widths.resize(cells.len(), 0);
        }
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.as_ref().chars().count());
        }
    }

    let mut out = String::new();
    for row in rows {
        for (i, cell) in row.as_ref().iter().enumerate() {
            out.push_str(&format!("{:<width$}", cell.as_ref(), width = widths[i] + 2));
        }
        out.push('\n');
    }
    out
}
