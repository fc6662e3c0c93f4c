// Copyright 2026-present Glimpse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm)
//! DP entirely. For the token-pair similarity gate this rejects most
//! non-matches before allocating anything.
//!
//! All comparisons here are case-insensitive: "Comedy" and "comedy" are zero
//! edits apart. Distances are measured over Unicode scalar values, not bytes.

/// Case-insensitive Levenshtein distance between two strings.
///
/// The minimum number of single-character insertions, deletions, or
/// substitutions (each cost 1) needed to turn `a` into `b`, comparing
/// characters case-insensitively. Total over all inputs: the distance to an
/// empty string is the other string's character count.
///
/// Single-row DP, O(m·n) time and O(n) space. Fine for the short titles and
/// query words this crate works over; do not point it at whole documents.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b_chars: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // dp[j] holds the distance between the current prefix of `a` and b[..j]
    let mut dp: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a_chars.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_chars.len()]
}

/// Are these strings within `max` edits of each other (case-insensitively)?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum value in a DP row exceeds `max`, abandon the DP early
///
/// Both exits are sound: the length difference is a lower bound on the
/// distance, and row minima never decrease. For any inputs this agrees with
/// `edit_distance(a, b) <= max`.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_chars: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b_chars: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    // Early-exit: length difference is a lower bound on edit distance
    if a_chars.len().abs_diff(b_chars.len()) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a_chars.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // Early-exit: if the minimum in this row exceeds max, no point continuing
        if min_row > max {
            return false;
        }
    }

    dp[b_chars.len()] <= max
}
