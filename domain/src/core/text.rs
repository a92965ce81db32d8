//! Text helpers for the domain layer.

/// Return a single-line preview of `text`, at most `max_chars` characters.
///
/// Internal whitespace runs collapse to one space. When the text is cut,
/// the preview ends with `...` (counted within `max_chars`).
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = collapsed.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Check whether `text` contains anything besides whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
