//! Shared test fixtures.

#![allow(dead_code)]

use glimpse::catalog::{CatalogItem, ItemKind};

/// Build a catalog item without the JSON ceremony.
pub fn item(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    kind: ItemKind,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        kind,
    }
}

/// A small mixed catalog: videos, a live event, a spark, a TV channel.
///
/// Indices are stable; tests assert against them directly.
pub fn demo_catalog() -> Vec<CatalogItem> {
    vec![
        item(
            "v1",
            "Comedy Night Special",
            "Stand-up from the main stage",
            "Comedy",
            ItemKind::Video,
        ),
        item(
            "v2",
            "Comedy Special",
            "An hour of jokes",
            "Comedy",
            ItemKind::Video,
        ),
        item(
            "v3",
            "Cooking with Fire",
            "Comedy meets cuisine",
            "Food",
            ItemKind::Video,
        ),
        item(
            "l1",
            "Late Night Live",
            "Talk show streamed live",
            "Talk",
            ItemKind::Live,
        ),
        item(
            "s1",
            "Comet Facts",
            "Sixty seconds of astronomy",
            "Science",
            ItemKind::Spark,
        ),
        item(
            "t1",
            "News 24",
            "Rolling news coverage",
            "News",
            ItemKind::Tv,
        ),
    ]
}
