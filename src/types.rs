// Copyright 2026-present Glimpse Contributors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of search results.
//!
//! These types define what comes back from a search: classified suggestions
//! for the dropdown, and the exact/approximate partition for the results
//! page. Items are referenced by their index into the caller's catalog
//! slice; the library never owns or copies catalog records.
//!
//! # Invariants
//!
//! - **Suggestion**: `item`, when present, indexes the slice the suggestion
//!   was computed from. Indices are only meaningful against that same slice.
//! - A catalog item appears in at most one suggestion category per call, and
//!   never as both an exact and an approximate result.

use serde::{Deserialize, Serialize};

/// How a suggestion relates to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// A likely fix for a misspelled query, picked by approximate matching.
    Correction,
    /// A title that textually extends the user's partial query.
    Completion,
    /// An item matched on secondary fields (description, category).
    Related,
}

/// One classified entry in the suggestion dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Which category this suggestion belongs to.
    pub kind: SuggestionKind,
    /// Display text, typically the matched item's title.
    pub text: String,
    /// Index of the source item in the catalog slice, for downstream linking.
    pub item: Option<usize>,
}

/// Searchable text extracted from one catalog item.
///
/// `primary` is what corrections and completions match against (the title).
/// `secondary` feeds only the related category (description, category, the
/// channel name, whatever the item shape has).
#[derive(Debug, Clone, Default)]
pub struct ItemText<'a> {
    pub primary: &'a str,
    pub secondary: Vec<&'a str>,
}

impl<'a> ItemText<'a> {
    /// Text with no secondary fields. Such items can never be `Related`.
    pub fn primary_only(primary: &'a str) -> Self {
        ItemText {
            primary,
            secondary: Vec::new(),
        }
    }
}

/// A catalog record the matcher can extract text from.
///
/// The trait form of the extraction callback: implement it once on your item
/// type and use [`crate::rank_suggestions`] directly, or skip it and pass a
/// closure to [`crate::rank_suggestions_with`].
pub trait Searchable {
    /// Primary display text (the title).
    fn primary_text(&self) -> &str;

    /// Secondary fields matched by the related category.
    fn secondary_texts(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Both together, as the extractor sees them.
    fn item_text(&self) -> ItemText<'_> {
        ItemText {
            primary: self.primary_text(),
            secondary: self.secondary_texts(),
        }
    }
}

/// A near-miss from [`crate::partition_results`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproximateMatch {
    /// Index of the item in the catalog slice.
    pub item: usize,
    /// Full-text edit distance from the query.
    pub distance: usize,
}

/// Direct results and near-misses for one catalog section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Items whose text contains the query as a substring, catalog order.
    pub exact: Vec<usize>,
    /// Remaining items close enough in edit distance, ascending by distance.
    pub approximate: Vec<ApproximateMatch>,
}

impl Partition {
    /// True when neither list has entries.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.approximate.is_empty()
    }
}
