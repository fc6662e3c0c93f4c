// Copyright 2026-present Glimpse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Catalog records for the CLI and tests.
//!
//! The library proper is agnostic to item shape; this module provides the
//! concrete shape the `glimpse` binary loads from JSON: one record per
//! video, live event, spark, or TV channel, with title, description, and
//! category as the searchable fields.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::{ItemText, Searchable};

/// What kind of content a catalog record is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Video,
    Live,
    Spark,
    Tv,
}

/// One searchable content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub kind: ItemKind,
}

impl Searchable for CatalogItem {
    fn primary_text(&self) -> &str {
        &self.title
    }

    fn secondary_texts(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        if !self.description.is_empty() {
            fields.push(self.description.as_str());
        }
        if !self.category.is_empty() {
            fields.push(self.category.as_str());
        }
        fields
    }
}

impl CatalogItem {
    /// Extraction function matching the `Searchable` impl, for use with the
    /// closure-taking entry points.
    pub fn item_text(&self) -> ItemText<'_> {
        Searchable::item_text(self)
    }
}

/// Load a catalog from a JSON array of items.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog {}: {}", path.display(), e))?;
    let items: Vec<CatalogItem> =
        serde_json::from_str(&content).map_err(|e| format!("Invalid catalog JSON: {}", e))?;
    Ok(items)
}
