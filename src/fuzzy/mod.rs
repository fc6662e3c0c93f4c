// Copyright 2026-present Glimpse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two entry points: `edit_distance` computes the full case-insensitive
//! Levenshtein distance, and `levenshtein_within` answers the cheaper
//! question "are these within k edits?" with early exits.

mod levenshtein;

pub use levenshtein::*;
