//! String utilities for the domain layer.

/// Upper-case the first character and keep the rest unchanged.
///
/// `"lending"` → `"Lending"`. Multi-character upper-case mappings
/// (e.g. `ß`) are kept in full.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep at most `max_chars` characters (UTF-8 safe, no ellipsis)
pub fn take_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept = take_chars(s, max_chars.saturating_sub(3));
        format!("{}...", kept)
    }
}
