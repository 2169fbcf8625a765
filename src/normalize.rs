//! Text normalization helpers shared by the classifier and its tests.

use crate::types::{NormalizedText, ReviewText};

/// Lowercase `text` and collapse every maximal run of characters outside
/// `[a-z0-9]` into a single space.
///
/// Leading and trailing runs also become single spaces; nothing is trimmed,
/// so punctuation-terminated reviews keep a trailing space. The output
/// alphabet is exactly lowercase ASCII letters, ASCII digits, and the space,
/// which makes the operation idempotent.
pub fn normalize_review<T: AsRef<str>>(text: T) -> NormalizedText {
    let source: &str = text.as_ref();
    let mut normalized = String::with_capacity(source.len());
    let mut in_separator_run = false;
    for ch in source.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            normalized.push(ch);
            in_separator_run = false;
        } else if !in_separator_run {
            normalized.push(' ');
            in_separator_run = true;
        }
    }
    normalized
}

/// True when `text` is already in normalized form.
pub fn is_normalized(text: &ReviewText) -> bool {
    normalize_review(text) == *text
}
