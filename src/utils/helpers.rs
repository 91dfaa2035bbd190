//! Helper functions and utilities
//!
//! This module contains common text helpers used by the strategies and the
//! server handlers.

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove one pair of matching wrapping quotes, if present
pub fn strip_wrapping_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Replace backslash-escaped quotes with the bare characters
pub fn unescape_quotes(text: &str) -> String {
    text.replace("\\\"", "\"").replace("\\'", "'")
}

/// Clean raw LLM output into a bare translation
pub fn clean_llm_output(raw: &str) -> String {
    unescape_quotes(strip_wrapping_quotes(raw.trim()))
}

/// 32-bit string hash with a 31 multiplier, wrapping on overflow
pub fn hash_bytes(bytes: &[u8]) -> i32 {
    bytes
        .iter()
        .fold(0i32, |hash, &b| hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(b as i32))
}

/// Sum of the character values of a language code
pub fn language_seed(code: &str) -> u32 {
    code.chars().map(|c| c as u32).sum()
}

/// Uppercase the first character, leaving the rest as-is
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
