//! Approximate text search for a streaming-catalog search bar.
//!
//! This crate provides the fuzzy-matching core behind search-as-you-type:
//! case-insensitive edit distance, a word-pair similarity predicate, and
//! ranked, classified suggestions (corrections, completions, related items)
//! over an in-memory catalog the caller owns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  text.rs    │────▶│  similar.rs  │────▶│  suggest.rs  │
//! │ (tokenize,  │     │ (are_similar,│     │ (rank_       │
//! │  normalize) │     │  thresholds) │     │  suggestions)│
//! └─────────────┘     └──────┬───────┘     └──────┬───────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌─────────────────────────────────┐
//!                     │            fuzzy/               │
//!                     │ (edit_distance,                 │
//!                     │  levenshtein_within)            │
//!                     └─────────────────────────────────┘
//! ```
//!
//! Everything is pure, synchronous computation: no I/O, no shared state,
//! nothing to cancel or retry. Concurrent calls (one per keystroke) are
//! independent; latest-query-wins debouncing belongs to the caller.
//!
//! # Usage
//!
//! ```
//! use glimpse::{rank_suggestions_with, ItemText, SuggestionKind};
//!
//! let titles = ["Comedy Special", "Live Sports Tonight"];
//! let suggestions = rank_suggestions_with("comdy", &titles, |t| ItemText::primary_only(t));
//!
//! assert_eq!(suggestions[0].kind, SuggestionKind::Correction);
//! assert_eq!(suggestions[0].text, "Comedy Special");
//! ```

pub mod catalog;
mod fuzzy;
mod similar;
mod suggest;
mod text;
mod types;

// Re-exports for public API
pub use fuzzy::{edit_distance, levenshtein_within};
pub use similar::{
    are_similar, are_similar_with, SimilarityThresholds, LONG_TOKEN_EDITS, SHORT_TOKEN_EDITS,
    SHORT_TOKEN_MAX_LEN,
};
pub use suggest::{
    partition_results, rank_suggestions, rank_suggestions_with, APPROXIMATE_DISTANCE_MAX,
    MAX_PER_CATEGORY,
};
pub use text::{normalize, tokenize};
pub use types::{
    ApproximateMatch, ItemText, Partition, Searchable, Suggestion, SuggestionKind,
};
