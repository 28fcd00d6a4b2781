//! LRU caching layer for search results.
//!
//! Entries are keyed by catalog generation plus the normalized query and
//! filters, and expire after a fixed lifetime. The cache is a pure latency
//! optimization: a miss, an expired entry, or a busy lock all fall back to
//! running the search.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;
use tracing::trace;

use crate::search::engine::{SearchHit, SearchQuery};

/// Default cache size for query results (number of queries)
pub const DEFAULT_RESULT_CACHE_SIZE: usize = 128;

/// Default lifetime of a cached result list.
pub const DEFAULT_RESULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Query result entry with metadata for cache management.
#[derive(Debug, Clone)]
pub struct CachedQueryResult {
    /// The ranked hits
    pub hits: Vec<SearchHit>,
    /// When this entry was cached
    pub cached_at: Instant,
    /// Number of times this entry was hit
    pub hit_count: u64,
}

/// Cache statistics for monitoring and tuning.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Total query cache hits
    pub hits: u64,
    /// Total query cache misses, expired entries included
    pub misses: u64,
    /// Entries dropped because they outlived the TTL
    pub expired: u64,
}

impl CacheStats {
    /// Calculate query cache hit rate.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe LRU cache of search results.
///
/// All cache operations are non-blocking (try-lock pattern).
pub struct ResultCache {
    entries: Mutex<LruCache<u64, CachedQueryResult>>,
    ttl: Duration,
    stats: Mutex<CacheStats>,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_CACHE_SIZE, DEFAULT_RESULT_TTL)
    }
}

impl ResultCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
            )),
            ttl,
            stats: Mutex::new(CacheStats::default()),
        }
    }

    /// Hash key for a query against one catalog generation.
    fn key(generation: u64, query: &SearchQuery) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        generation.hash(&mut hasher);
        query.normalized().hash(&mut hasher);
        query.category.hash(&mut hasher);
        query.tags.hash(&mut hasher);
        hasher.finish()
    }

    /// Get cached hits.
    ///
    /// Returns None if not cached, expired, or the cache is locked.
    pub fn get(&self, generation: u64, query: &SearchQuery) -> Option<Vec<SearchHit>> {
        let key = Self::key(generation, query);
        let mut entries = self.entries.try_lock().ok()?;
        let mut stats = self.stats.try_lock().ok()?;

        let expired = match entries.get_mut(&key) {
            Some(entry) if entry.cached_at.elapsed() < self.ttl => {
                entry.hit_count += 1;
                stats.hits += 1;
                return Some(entry.hits.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(&key);
            stats.expired += 1;
            trace!(target: "cache", key, "result entry expired");
        }
        stats.misses += 1;
        None
    }

    /// Cache hits for a query.
    ///
    /// Silently fails if the cache is locked.
    pub fn put(&self, generation: u64, query: &SearchQuery, hits: Vec<SearchHit>) {
        let key = Self::key(generation, query);
        if let Ok(mut entries) = self.entries.try_lock() {
            entries.put(
                key,
                CachedQueryResult {
                    hits,
                    cached_at: Instant::now(),
                    hit_count: 0,
                },
            );
        }
    }

    /// Get current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats
            .try_lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Clear all entries and statistics.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.try_lock() {
            entries.clear();
        }
        if let Ok(mut stats) = self.stats.try_lock() {
            *stats = CacheStats::default();
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.try_lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("ttl", &self.ttl())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
