//! Metric properties of the edit distance and its bounded variant.

use glimpse::{edit_distance, levenshtein_within, tokenize};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Random word-like strings, mixed case.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{0,10}").unwrap()
}

/// Random short phrases with ragged whitespace.
fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,24}").unwrap()
}

/// Words with diacritics and multi-byte characters.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "naïve".to_string(),
        "résumé".to_string(),
        "über".to_string(),
        "señal".to_string(),
        "comedy".to_string(),
        "spark".to_string(),
        "channel".to_string(),
    ])
}

// ============================================================================
// DISTANCE PROPERTIES
// ============================================================================

proptest! {
    /// Distance from a string to itself is zero.
    #[test]
    fn prop_distance_reflexive(a in phrase_strategy()) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
    }

    /// Distance is symmetric.
    #[test]
    fn prop_distance_symmetric(a in phrase_strategy(), b in phrase_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    /// Case does not affect distance.
    #[test]
    fn prop_distance_case_insensitive(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(
            edit_distance(&a, &b),
            edit_distance(&a.to_lowercase(), &b.to_lowercase())
        );
        prop_assert_eq!(
            edit_distance(&a, &b),
            edit_distance(&a.to_uppercase(), &b.to_lowercase())
        );
    }

    /// Distance zero exactly when the strings are case-insensitively equal.
    #[test]
    fn prop_distance_zero_iff_equal(a in word_strategy(), b in word_strategy()) {
        let zero = edit_distance(&a, &b) == 0;
        let equal = a.to_lowercase() == b.to_lowercase();
        prop_assert_eq!(zero, equal);
    }

    /// Distance to the empty string is the other string's length.
    #[test]
    fn prop_distance_to_empty(a in phrase_strategy()) {
        prop_assert_eq!(edit_distance("", &a), a.chars().count());
        prop_assert_eq!(edit_distance(&a, ""), a.chars().count());
    }

    /// Distance never exceeds the longer string's length.
    #[test]
    fn prop_distance_bounded(a in word_strategy(), b in word_strategy()) {
        let bound = a.chars().count().max(b.chars().count());
        prop_assert!(edit_distance(&a, &b) <= bound);
    }

    /// Triangle inequality.
    #[test]
    fn prop_distance_triangle(
        a in word_strategy(),
        b in word_strategy(),
        c in word_strategy()
    ) {
        prop_assert!(
            edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c)
        );
    }

    /// The bounded check agrees with the full distance for every threshold.
    #[test]
    fn prop_within_agrees_with_distance(
        a in phrase_strategy(),
        b in phrase_strategy(),
        max in 0usize..6
    ) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), edit_distance(&a, &b) <= max);
    }

    /// Same agreement for multi-byte text.
    #[test]
    fn prop_within_agrees_unicode(
        a in unicode_word_strategy(),
        b in unicode_word_strategy(),
        max in 0usize..4
    ) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), edit_distance(&a, &b) <= max);
    }
}

// ============================================================================
// TOKENIZER PROPERTIES
// ============================================================================

proptest! {
    /// Tokens are non-empty, lowercase, and contain no whitespace.
    #[test]
    fn prop_tokens_are_clean(s in phrase_strategy()) {
        for token in tokenize(&s) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    /// Tokenizing is insensitive to surrounding and repeated whitespace.
    #[test]
    fn prop_tokenize_collapses_whitespace(words in prop::collection::vec("[a-z]{1,6}", 0..5)) {
        let single = words.join(" ");
        let ragged = format!("  {}  ", words.join("   "));
        prop_assert_eq!(tokenize(&single), tokenize(&ragged));
    }

    /// Every token appears in the lowercased input.
    #[test]
    fn prop_tokens_come_from_input(s in phrase_strategy()) {
        let lower = s.to_lowercase();
        for token in tokenize(&s) {
            prop_assert!(lower.contains(&token));
        }
    }
}
