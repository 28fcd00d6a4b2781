//! Search over a memoized catalog with an optional result cache.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{CatalogSnapshot, CatalogStore};
use crate::error::Result;
use crate::search::cache::{CacheStats, ResultCache};
use crate::search::engine::{SearchEngine, SearchHit, SearchQuery};

/// Decorates [`SearchEngine`] with a [`CatalogStore`] and a [`ResultCache`].
///
/// Returns the same hits as running the engine directly on the current
/// catalog; the caches only change latency.
#[derive(Debug)]
pub struct CachedSearcher {
    store: CatalogStore,
    engine: SearchEngine,
    results: Option<ResultCache>,
}

impl CachedSearcher {
    pub const fn new(store: CatalogStore, engine: SearchEngine, results: Option<ResultCache>) -> Self {
        Self {
            store,
            engine,
            results,
        }
    }

    /// The current catalog snapshot, loading it if needed.
    pub fn catalog(&self) -> Result<Arc<CatalogSnapshot>> {
        self.store.get()
    }

    pub fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        let snapshot = self.store.get()?;

        if let Some(cache) = &self.results {
            if let Some(hits) = cache.get(snapshot.generation, query) {
                debug!(target: "cache", query = %query.text, hits = hits.len(), "result cache hit");
                return Ok(hits);
            }
        }

        let hits = self.engine.search(&snapshot.catalog, query);
        if let Some(cache) = &self.results {
            cache.put(snapshot.generation, query, hits.clone());
        }
        Ok(hits)
    }

    /// Drop the cached catalog and every cached result.
    pub fn invalidate(&self) {
        self.store.invalidate();
        if let Some(cache) = &self.results {
            cache.clear();
        }
    }

    pub fn result_stats(&self) -> Option<CacheStats> {
        self.results.as_ref().map(ResultCache::stats)
    }

    pub const fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BytesSource;
    use crate::search::engine::CategoryFilter;

    const SOURCE: &[u8] = br#"{"categories": [
        {"name": "Search Engines", "tools": [
            {"name": "Shodan", "description": "Internet-connected device search engine", "url": "https://www.shodan.io"}
        ]},
        {"name": "Dark Web", "tools": [
            {"name": "Ahmia", "description": "Dark web search engine", "url": "https://ahmia.fi", "tags": ["tor"]}
        ]}
    ]}"#;

    fn searcher(results: Option<ResultCache>) -> CachedSearcher {
        CachedSearcher::new(
            CatalogStore::with_default_ttl(BytesSource::new(SOURCE.to_vec())),
            SearchEngine::default(),
            results,
        )
    }

    #[test]
    fn cached_and_uncached_agree() {
        let cached = searcher(Some(ResultCache::default()));
        let uncached = searcher(None);

        for text in ["", "search engine", "tor", "shodan", "xyzxyz123"] {
            let query = SearchQuery::new(text);
            let first = cached.search(&query).unwrap();
            let second = cached.search(&query).unwrap();
            assert_eq!(first, second, "{text}");
            assert_eq!(first, uncached.search(&query).unwrap(), "{text}");
        }
        assert!(uncached.result_stats().is_none());
    }

    #[test]
    fn repeated_query_hits_cache() {
        let searcher = searcher(Some(ResultCache::default()));
        let query = SearchQuery::new("shodan").with_category(CategoryFilter::parse("All"));

        searcher.search(&query).unwrap();
        searcher.search(&query).unwrap();

        let stats = searcher.result_stats().unwrap();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn invalidate_clears_results_and_reloads() {
        let searcher = searcher(Some(ResultCache::default()));
        let query = SearchQuery::new("");

        searcher.search(&query).unwrap();
        let before = searcher.catalog().unwrap().generation;
        searcher.invalidate();

        assert_eq!(searcher.search(&query).unwrap().len(), 2);
        assert_eq!(searcher.catalog().unwrap().generation, before + 1);
        assert_eq!(searcher.result_stats().unwrap().hits, 0);
    }
}
