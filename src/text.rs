//! Utility functions for string processing.

/// Split a string into lowercase, whitespace-delimited, non-empty tokens.
///
/// Splitting is on any run of one or more whitespace characters; punctuation
/// embedded in a token is kept. Empty or whitespace-only input yields an
/// empty vector.
pub fn tokenize(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Normalize a string for substring matching: lowercase and collapse
/// whitespace runs to single spaces.
///
/// Catalog titles come from user-edited fields, so "Comedy  Night " and
/// "comedy night" must compare equal.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
