// Copyright 2026-present Glimpse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Suggestion ranking: where the rubber meets the road.
//!
//! Given a query and a catalog, classify items into the three dropdown
//! categories (correction, completion, related) and, separately, partition a
//! catalog section into direct results and near-misses for the results page.
//!
//! The categories run in priority order. Items that match the query as a
//! literal substring are "exact" and never appear as suggestions at all;
//! the UI shows them as direct results. Corrections are only computed when
//! there are no exact matches: if good results exist there is nothing to
//! correct. A seen-set deduplicates across categories so no item shows up
//! twice in one dropdown.

use std::collections::HashSet;

use crate::fuzzy::edit_distance;
use crate::similar::are_similar;
use crate::text::normalize;
use crate::types::{ApproximateMatch, ItemText, Partition, Searchable, Suggestion, SuggestionKind};

/// Maximum entries per suggestion category.
pub const MAX_PER_CATEGORY: usize = 3;

/// Largest full-text edit distance still reported as an approximate result.
pub const APPROXIMATE_DISTANCE_MAX: usize = 3;

/// Produce classified suggestions for a query over a `Searchable` catalog.
///
/// Convenience wrapper over [`rank_suggestions_with`] using the items' own
/// text extraction.
pub fn rank_suggestions<T: Searchable>(query: &str, items: &[T]) -> Vec<Suggestion> {
    rank_suggestions_with(query, items, T::item_text)
}

/// Produce classified suggestions for a query, extracting searchable text
/// with a caller-supplied function.
///
/// Pure and deterministic: identical inputs give identical output, and the
/// catalog is never mutated. An empty or whitespace-only query returns no
/// suggestions without touching the catalog, since an empty substring would match
/// everything.
///
/// Category order in the output is correction, completion, related. Each
/// category holds at most [`MAX_PER_CATEGORY`] entries and no item appears
/// in more than one category. Corrections are sorted by ascending edit
/// distance from the query; the other two keep catalog order.
pub fn rank_suggestions_with<'a, T, F>(query: &str, items: &'a [T], extract: F) -> Vec<Suggestion>
where
    F: Fn(&'a T) -> ItemText<'a>,
{
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let needle = normalize(trimmed);

    let texts: Vec<ItemText<'a>> = items.iter().map(extract).collect();
    let primaries: Vec<String> = texts.iter().map(|t| normalize(t.primary)).collect();

    // Items matched as literal substrings are direct results, not suggestions
    let exact: HashSet<usize> = primaries
        .iter()
        .enumerate()
        .filter(|(_, p)| p.contains(&needle))
        .map(|(idx, _)| idx)
        .collect();

    let mut suggestions = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();

    // Spelling corrections, only when nothing matched outright
    if exact.is_empty() {
        let mut corrections: Vec<(usize, usize)> = texts
            .iter()
            .enumerate()
            .filter(|(_, t)| are_similar(trimmed, t.primary))
            .map(|(idx, t)| (idx, edit_distance(&needle, t.primary)))
            .collect();
        corrections.sort_by_key(|&(_, distance)| distance);

        for (idx, _) in corrections.into_iter().take(MAX_PER_CATEGORY) {
            seen.insert(idx);
            suggestions.push(Suggestion {
                kind: SuggestionKind::Correction,
                text: texts[idx].primary.to_string(),
                item: Some(idx),
            });
        }
    }

    // Completions: the title, or some word of it, strictly extends the query.
    // A title equal to the query has nothing left to complete; substring
    // matches longer than the query still make useful completions even
    // though they also surface as direct results.
    let mut completions = 0usize;
    for (idx, primary) in primaries.iter().enumerate() {
        if completions == MAX_PER_CATEGORY {
            break;
        }
        if seen.contains(&idx) || *primary == needle {
            continue;
        }
        let extends = primary.starts_with(&needle)
            || primary.split_whitespace().any(|word| word.starts_with(&needle));
        if extends {
            seen.insert(idx);
            completions += 1;
            suggestions.push(Suggestion {
                kind: SuggestionKind::Completion,
                text: texts[idx].primary.to_string(),
                item: Some(idx),
            });
        }
    }

    // Related content, matched on secondary fields only
    let mut related = 0usize;
    for (idx, text) in texts.iter().enumerate() {
        if related == MAX_PER_CATEGORY {
            break;
        }
        if exact.contains(&idx) || seen.contains(&idx) {
            continue;
        }
        let matches_secondary = text
            .secondary
            .iter()
            .any(|field| normalize(field).contains(&needle));
        if matches_secondary {
            seen.insert(idx);
            related += 1;
            suggestions.push(Suggestion {
                kind: SuggestionKind::Related,
                text: text.primary.to_string(),
                item: Some(idx),
            });
        }
    }

    suggestions
}

/// Split a catalog section into direct results and near-misses.
///
/// An item whose full extracted text (primary plus secondary fields)
/// contains the query as a substring is exact; remaining items within
/// [`APPROXIMATE_DISTANCE_MAX`] full-text edits are approximate, sorted
/// ascending by distance with catalog order breaking ties. No item lands in
/// both lists. An empty or whitespace-only query yields an empty partition.
pub fn partition_results<'a, T, F>(query: &str, items: &'a [T], extract: F) -> Partition
where
    F: Fn(&'a T) -> ItemText<'a>,
{
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Partition::default();
    }
    let needle = normalize(trimmed);

    let mut partition = Partition::default();
    for (idx, text) in items.iter().map(extract).enumerate() {
        let mut full_text = normalize(text.primary);
        for field in &text.secondary {
            full_text.push(' ');
            full_text.push_str(&normalize(field));
        }

        if full_text.contains(&needle) {
            partition.exact.push(idx);
            continue;
        }

        let distance = edit_distance(&needle, &full_text);
        if distance <= APPROXIMATE_DISTANCE_MAX {
            partition.approximate.push(ApproximateMatch {
                item: idx,
                distance,
            });
        }
    }

    partition
        .approximate
        .sort_by_key(|approximate| approximate.distance);
    partition
}
