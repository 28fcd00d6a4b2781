//! Time-bounded memoization of the loaded catalog.
//!
//! The store hands out `Arc` snapshots. A reload builds the new catalog
//! without holding the snapshot lock and then swaps the pointer, so readers
//! either see the old catalog or the new one, never a partial one. A failed
//! reload leaves the previous snapshot in place and returns the error.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::catalog::{Catalog, load, load_from_path};
use crate::error::Result;

/// Default lifetime of a loaded catalog.
pub const DEFAULT_CATALOG_TTL: Duration = Duration::from_secs(60 * 60);

/// Where catalog bytes come from.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Catalog>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Catalog read from a JSON file on every (re)load.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<Catalog> {
        load_from_path(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog parsed from bytes held in memory.
#[derive(Debug, Clone)]
pub struct BytesSource {
    bytes: Vec<u8>,
}

impl BytesSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl CatalogSource for BytesSource {
    fn load(&self) -> Result<Catalog> {
        load(&self.bytes)
    }

    fn describe(&self) -> String {
        format!("<{} bytes in memory>", self.bytes.len())
    }
}

/// A loaded catalog plus the load it came from.
#[derive(Debug)]
pub struct CatalogSnapshot {
    /// Increases by one with every successful load of the owning store.
    pub generation: u64,
    pub catalog: Arc<Catalog>,
    loaded_at: Instant,
}

impl CatalogSnapshot {
    pub fn age(&self) -> Duration {
        self.loaded_at.elapsed()
    }
}

pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    /// `None` disables memoization: every access reloads.
    ttl: Option<Duration>,
    current: RwLock<Option<Arc<CatalogSnapshot>>>,
    reload: Mutex<()>,
    generation: AtomicU64,
}

impl CatalogStore {
    pub fn new(source: impl CatalogSource + 'static, ttl: Option<Duration>) -> Self {
        Self {
            source: Box::new(source),
            ttl,
            current: RwLock::new(None),
            reload: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    /// Store with the default one-hour lifetime.
    pub fn with_default_ttl(source: impl CatalogSource + 'static) -> Self {
        Self::new(source, Some(DEFAULT_CATALOG_TTL))
    }

    /// Current catalog, loading or reloading it if missing or expired.
    pub fn get(&self) -> Result<Arc<CatalogSnapshot>> {
        if let Some(snapshot) = self.fresh() {
            return Ok(snapshot);
        }

        let _reload = self.reload.lock();
        // Another caller may have finished a reload while we waited.
        if let Some(snapshot) = self.fresh() {
            return Ok(snapshot);
        }

        let catalog = self.source.load()?;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = Arc::new(CatalogSnapshot {
            generation,
            catalog: Arc::new(catalog),
            loaded_at: Instant::now(),
        });
        *self.current.write() = Some(Arc::clone(&snapshot));

        info!(
            target: "cache",
            source = %self.source.describe(),
            generation,
            tools = snapshot.catalog.tool_count(),
            "catalog snapshot swapped in"
        );
        Ok(snapshot)
    }

    /// Drop the cached catalog; the next [`get`](Self::get) reloads it.
    pub fn invalidate(&self) {
        if self.current.write().take().is_some() {
            debug!(target: "cache", "catalog snapshot invalidated");
        }
    }

    /// Number of successful loads so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub const fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    fn fresh(&self) -> Option<Arc<CatalogSnapshot>> {
        let ttl = self.ttl?;
        let guard = self.current.read();
        let snapshot = guard.as_ref()?;
        if snapshot.age() < ttl {
            Some(Arc::clone(snapshot))
        } else {
            debug!(target: "cache", generation = snapshot.generation, "catalog snapshot expired");
            None
        }
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("source", &self.source.describe())
            .field("ttl", &self.ttl)
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}
