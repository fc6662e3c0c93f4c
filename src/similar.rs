// Copyright 2026-present Glimpse Contributors
// SPDX-License-Identifier: Apache-2.0

//! The similarity predicate that gates spelling corrections.
//!
//! Two strings are "similar" when any word of one is within a small edit
//! distance of any word of the other. The tolerance depends on word length:
//! short words flip meaning on a single edit ("cat" vs "car"), so they get a
//! tighter threshold than long ones, where two edits still usually point at
//! the same intended word ("televsion" → "television").
//!
//! The default table is a hand-tuned heuristic carried over from the search
//! UI it was built for. It is a config struct rather than a pair of magic
//! numbers so precision/recall tuning does not require touching this module.

use crate::fuzzy::levenshtein_within;
use crate::text::tokenize;

/// Word length at or below which the tight threshold applies.
pub const SHORT_TOKEN_MAX_LEN: usize = 4;

/// Edits tolerated between short words.
pub const SHORT_TOKEN_EDITS: usize = 1;

/// Edits tolerated between longer words.
pub const LONG_TOKEN_EDITS: usize = 2;

/// Length-dependent edit tolerances for word-pair matching.
///
/// The length of a pair is the longer of the two words, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityThresholds {
    /// Pairs whose longer word is at most this many chars use `short_edits`.
    pub short_max_len: usize,
    /// Edits tolerated for short pairs.
    pub short_edits: usize,
    /// Edits tolerated for everything longer.
    pub long_edits: usize,
}

impl Default for SimilarityThresholds {
    fn default() -> Self {
        SimilarityThresholds {
            short_max_len: SHORT_TOKEN_MAX_LEN,
            short_edits: SHORT_TOKEN_EDITS,
            long_edits: LONG_TOKEN_EDITS,
        }
    }
}

impl SimilarityThresholds {
    /// Edits tolerated for a word pair whose longer word has `max_len` chars.
    pub fn edits_for_len(&self, max_len: usize) -> usize {
        if max_len <= self.short_max_len {
            self.short_edits
        } else {
            self.long_edits
        }
    }
}

/// Should these strings be considered an approximate match?
///
/// Uses the default threshold table. See [`are_similar_with`].
pub fn are_similar(a: &str, b: &str) -> bool {
    are_similar_with(a, b, &SimilarityThresholds::default())
}

/// Should these strings be considered an approximate match, under the given
/// thresholds?
///
/// Tokenizes both strings and tests every word pair; one pair within its
/// length-dependent tolerance is enough. Empty or whitespace-only input has
/// no words and therefore matches nothing.
///
/// Worst case O(words(a) · words(b) · len²), but the bounded distance check
/// abandons most pairs after the length comparison.
pub fn are_similar_with(a: &str, b: &str, thresholds: &SimilarityThresholds) -> bool {
    let words_a = tokenize(a);
    let words_b = tokenize(b);

    for word_a in &words_a {
        let len_a = word_a.chars().count();
        for word_b in &words_b {
            let max_len = len_a.max(word_b.chars().count());
            let max_edits = thresholds.edits_for_len(max_len);
            if levenshtein_within(word_a, word_b, max_edits) {
                return true;
            }
        }
    }

    false
}
