//! Search engine for catalog tools
//!
//! Fuzzy partial-ratio matching over name, description, category and tags,
//! with threshold filtering and a deterministic ordering. `CachedSearcher`
//! layers the catalog store and the result cache on top.

pub mod cache;
pub mod cached;
pub mod engine;
pub mod fuzzy;
pub mod highlight;

pub use cache::{CacheStats, ResultCache};
pub use cached::CachedSearcher;
pub use engine::{
    ALL_CATEGORIES, CategoryFilter, DEFAULT_THRESHOLD, SearchEngine, SearchHit, SearchQuery,
    TagFilter, search, search_catalog,
};
pub use fuzzy::partial_ratio;
pub use highlight::{highlight, highlight_with};
