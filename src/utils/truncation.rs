/// First `max_chars` characters of `text` on a single line, with `...`
/// appended when anything was cut.
pub fn summarize_text(text: &str, max_chars: usize) -> String {
    let mut summary: String = text
        .chars()
        .take(max_chars)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if text.chars().count() > max_chars {
        summary.push_str("...");
    }
    summary
}
