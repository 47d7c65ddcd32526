// src/core/catalog.rs

use crate::core::error::CatalogError;
use crate::core::models::ToolEntry;
use std::collections::HashMap;
use tracing::warn;

/// The set of configured tools, in document order.
///
/// Built once at startup and never mutated afterwards, so it can be read
/// from the navigator and the UI without synchronization.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ToolEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from entries in display order. A repeated name keeps
    /// its first occurrence.
    pub fn new(entries: impl IntoIterator<Item = ToolEntry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            if catalog.index.contains_key(&entry.name) {
                warn!(tool = %entry.name, "Duplicate tool name ignored.");
                continue;
            }
            catalog.index.insert(entry.name.clone(), catalog.entries.len());
            catalog.entries.push(entry);
        }
        catalog
    }

    /// The catalog shown when configuration loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entry(&self, name: &str) -> Result<&ToolEntry, CatalogError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
