//! Fixed-shape catalog records.
//!
//! `Raw*` types mirror the JSON source exactly; the public types carry the
//! fields assigned during load (`uid`, `category`).

use serde::{Deserialize, Serialize};

/// Tag list shown by consumers when a catalog has no tags at all. A tag
/// filter consisting of only this value is treated as no filter.
pub const NO_TAGS_SENTINEL: &str = "No tags available";

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// `"<categoryIndex>_<toolIndex>"`, assigned at load time.
    pub uid: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub tags: Vec<String>,
    /// Name of the owning category.
    pub category: String,
}

impl Tool {
    /// Tags joined with single spaces, in source order.
    pub fn tags_text(&self) -> String {
        self.tags.join(" ")
    }

    pub fn has_any_tag<'a>(&self, wanted: impl IntoIterator<Item = &'a String>) -> bool {
        wanted.into_iter().any(|tag| self.tags.contains(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub tools: Vec<Tool>,
}

/// The loaded catalog. Immutable after construction; only the loader builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub(crate) const fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Categories in source order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Every tool in catalog order.
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.categories.iter().flat_map(|c| c.tools.iter())
    }

    pub fn tool(&self, uid: &str) -> Option<&Tool> {
        self.tools().find(|t| t.uid == uid)
    }

    pub fn tool_count(&self) -> usize {
        self.categories.iter().map(|c| c.tools.len()).sum()
    }

    /// Distinct tags across the catalog, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tools().flat_map(|t| t.tags.iter().cloned()).collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCatalog {
    pub categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCategory {
    pub name: String,
    pub tools: Vec<RawTool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTool {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}
