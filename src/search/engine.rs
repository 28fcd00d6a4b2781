//! Query evaluation over a loaded catalog.
//!
//! Scoring is best-field-match: a tool's score is the maximum partial ratio of
//! the query against its name, description, category name and joined tags.
//! Results below the threshold are dropped and the rest are ordered by score
//! descending, then name ascending. The sort is stable, so tools with equal
//! score and name stay in catalog order.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, NO_TAGS_SENTINEL, Tool};
use crate::search::fuzzy::partial_ratio;

/// Minimum best-field score a tool needs to match a non-empty query.
pub const DEFAULT_THRESHOLD: f64 = 65.0;

/// Score given to every tool when the query is empty.
pub const MATCH_ALL_SCORE: f64 = 100.0;

/// Category filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// `"All"` and the empty string both mean no filter.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }
}

/// Set of tags a tool must intersect.
///
/// An empty filter, or one holding only [`NO_TAGS_SENTINEL`], lets every tool
/// through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagFilter(BTreeSet<String>);

impl TagFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn is_inert(&self) -> bool {
        self.0.is_empty() || (self.0.len() == 1 && self.0.contains(NO_TAGS_SENTINEL))
    }

    pub fn matches(&self, tool: &Tool) -> bool {
        self.is_inert() || tool.has_any_tag(&self.0)
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One search request: raw query text plus filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub tags: TagFilter,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: TagFilter) -> Self {
        self.tags = tags;
        self
    }

    /// Lower-cased, trimmed query text used for scoring.
    pub fn normalized(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

/// A ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Name of the category the tool was found in.
    pub category: String,
    pub tool: Tool,
    pub score: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    threshold: f64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl SearchEngine {
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Evaluate `query` against `catalog`. Pure: reads the catalog, allocates
    /// only the returned hits.
    pub fn search(&self, catalog: &Catalog, query: &SearchQuery) -> Vec<SearchHit> {
        let needle = query.normalized();
        let mut hits = Vec::new();
        let mut scanned = 0usize;

        for category in catalog.categories() {
            if !query.category.matches(&category.name) {
                continue;
            }
            for tool in &category.tools {
                if !query.tags.matches(tool) {
                    continue;
                }
                scanned += 1;

                let score = if needle.is_empty() {
                    MATCH_ALL_SCORE
                } else {
                    let score = score_tool(&needle, &category.name, tool);
                    if score < self.threshold {
                        continue;
                    }
                    score
                };

                hits.push(SearchHit {
                    category: category.name.clone(),
                    tool: tool.clone(),
                    score,
                });
            }
        }

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.tool.name.cmp(&b.tool.name))
        });

        debug!(
            target: "search",
            query = %needle,
            category = query.category.as_str(),
            scanned,
            matched = hits.len(),
            "search complete"
        );
        hits
    }
}

/// Best-field score of an already normalized query against one tool.
pub fn score_tool(needle: &str, category: &str, tool: &Tool) -> f64 {
    [
        partial_ratio(needle, &tool.name.to_lowercase()),
        partial_ratio(needle, &tool.description.to_lowercase()),
        partial_ratio(needle, &category.to_lowercase()),
        partial_ratio(needle, &tool.tags_text().to_lowercase()),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

/// Search with the default threshold.
pub fn search(catalog: &Catalog, query: &SearchQuery) -> Vec<SearchHit> {
    SearchEngine::default().search(catalog, query)
}

/// Search from plain string arguments, the shape presentation layers hold.
pub fn search_catalog(
    catalog: &Catalog,
    query: &str,
    category: &str,
    tags: &[String],
) -> Vec<SearchHit> {
    let query = SearchQuery::new(query)
        .with_category(CategoryFilter::parse(category))
        .with_tags(TagFilter::new(tags.iter().cloned()));
    search(catalog, &query)
}
