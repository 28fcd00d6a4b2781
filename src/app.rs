use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::catalog::{CatalogStore, FileSource};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::search::{CachedSearcher, ResultCache, SearchEngine};

/// Everything a catalog-backed command needs, built once per invocation.
pub struct AppContext {
    pub config: Config,
    pub searcher: Arc<CachedSearcher>,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = find_root()?;
        let config = Config::load(cli.config.as_deref(), &root)?;
        let searcher = build_searcher(&config, &config.catalog_path(&root));

        // Fail fast on a missing or malformed catalog.
        let snapshot = searcher.catalog()?;
        info!(
            target: "catalog",
            categories = snapshot.catalog.categories().len(),
            tools = snapshot.catalog.tool_count(),
            "catalog ready"
        );

        Ok(Self {
            config,
            searcher: Arc::new(searcher),
            output_format: cli.output_format(),
        })
    }
}

/// `TOOLKIT_ROOT` if set, otherwise the working directory.
pub fn find_root() -> Result<PathBuf> {
    if let Ok(root) = std::env::var("TOOLKIT_ROOT") {
        return Ok(PathBuf::from(root));
    }
    Ok(std::env::current_dir()?)
}

/// Wire the catalog store, engine and result cache from configuration.
pub fn build_searcher(config: &Config, catalog_path: &Path) -> CachedSearcher {
    let cache = &config.cache;
    let store = CatalogStore::new(
        FileSource::new(catalog_path),
        cache.enabled.then_some(cache.catalog_ttl),
    );
    let results = cache
        .enabled
        .then(|| ResultCache::new(cache.max_results, cache.results_ttl));

    CachedSearcher::new(store, SearchEngine::new(config.search.threshold), results)
}
