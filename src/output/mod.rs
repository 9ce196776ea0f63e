// Output formatting — terminal rendering helpers.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..."
/// when truncated.
///
/// Character-based rather than byte-based, so multi-byte text (emoji,
/// accented letters) never panics.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}...")
}
