//! Line splitting for decoded resume text.

/// Line boundaries produced by PDF text layers, beyond plain `\n`.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Every line of `text`, untrimmed, including empty ones.
pub fn raw_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_break)
}

/// Trimmed, non-empty lines of `text` in document order.
pub fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    raw_lines(text).map(str::trim).filter(|line| !line.is_empty())
}

/// Truncates `text` to at most `max_chars` characters; `None` for empty text.
pub fn preview(text: &str, max_chars: usize) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(max_chars).collect())
}
