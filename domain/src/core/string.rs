//! String utilities for the domain layer.

/// Shorten text to at most `max_chars` characters, ending with "..."
///
/// Counts characters rather than bytes so Danish letters (æ, ø, å)
/// never get split.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let head: String = s.chars().take(keep).collect();
    format!("{}...", head)
}

/// Number of whitespace-separated words
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}
