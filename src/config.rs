use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::DEFAULT_CATALOG_PATH;
use crate::catalog::store::DEFAULT_CATALOG_TTL;
use crate::error::{Result, ToolkitError};
use crate::layout::DisplayMode;
use crate::search::cache::{DEFAULT_RESULT_CACHE_SIZE, DEFAULT_RESULT_TTL};
use crate::search::engine::DEFAULT_THRESHOLD;

/// Project-local config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "toolkit.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TOOLKIT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;
        debug!(target: "config", catalog = %config.catalog.path.display(), "configuration resolved");

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("toolkit/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            ToolkitError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            ToolkitError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        debug!(target: "config", path = %path.display(), "config file merged");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.catalog {
            self.catalog.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.cache {
            self.cache.merge(patch);
        }
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("TOOLKIT_CATALOG_PATH") {
            self.catalog.path = PathBuf::from(value);
        }

        if let Some(value) = env_f64("TOOLKIT_SEARCH_THRESHOLD")? {
            self.search.threshold = value;
        }

        if let Some(value) = env_bool("TOOLKIT_CACHE_ENABLED")? {
            self.cache.enabled = value;
        }
        if env_bool("TOOLKIT_CACHE_DISABLED")?.unwrap_or(false) {
            self.cache.enabled = false;
        }
        if let Some(value) = env_u64("TOOLKIT_CACHE_CATALOG_TTL_SECONDS")? {
            self.cache.catalog_ttl = Duration::from_secs(value);
        }
        if let Some(value) = env_u64("TOOLKIT_CACHE_RESULTS_TTL_SECONDS")? {
            self.cache.results_ttl = Duration::from_secs(value);
        }
        if let Some(value) = env_usize("TOOLKIT_CACHE_MAX_RESULTS")? {
            self.cache.max_results = value;
        }

        if let Some(value) = env_string("TOOLKIT_DISPLAY_MODE") {
            self.display.mode = value.parse()?;
        }

        Ok(())
    }

    /// Reject values that would silently change search semantics.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()
    }

    /// Catalog path, resolved against `base` when relative.
    pub fn catalog_path(&self, base: &Path) -> PathBuf {
        if self.catalog.path.is_absolute() {
            self.catalog.path.clone()
        } else {
            base.join(&self.catalog.path)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl CatalogConfig {
    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.threshold {
            self.threshold = value;
        }
    }

    fn validate(&self) -> Result<()> {
        let threshold = self.threshold;
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            return Err(ToolkitError::Config(format!(
                "search.threshold must be a number between 0 and 100, got {threshold}"
            )));
        }
        Ok(())
    }
}

const fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_catalog_ttl", with = "humantime_serde")]
    pub catalog_ttl: Duration,
    #[serde(default = "default_results_ttl", with = "humantime_serde")]
    pub results_ttl: Duration,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            catalog_ttl: DEFAULT_CATALOG_TTL,
            results_ttl: DEFAULT_RESULT_TTL,
            max_results: DEFAULT_RESULT_CACHE_SIZE,
        }
    }
}

impl CacheConfig {
    fn merge(&mut self, patch: CachePatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.catalog_ttl {
            self.catalog_ttl = value;
        }
        if let Some(value) = patch.results_ttl {
            self.results_ttl = value;
        }
        if let Some(value) = patch.max_results {
            self.max_results = value;
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_catalog_ttl() -> Duration {
    DEFAULT_CATALOG_TTL
}

const fn default_results_ttl() -> Duration {
    DEFAULT_RESULT_TTL
}

const fn default_max_results() -> usize {
    DEFAULT_RESULT_CACHE_SIZE
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub mode: DisplayMode,
}

impl DisplayConfig {
    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.mode {
            self.mode = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub catalog: Option<CatalogPatch>,
    pub search: Option<SearchPatch>,
    pub cache: Option<CachePatch>,
    pub display: Option<DisplayPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogPatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CachePatch {
    pub enabled: Option<bool>,
    #[serde(default, with = "humantime_serde")]
    pub catalog_ttl: Option<Duration>,
    #[serde(default, with = "humantime_serde")]
    pub results_ttl: Option<Duration>,
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayPatch {
    pub mode: Option<DisplayMode>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    match std::env::var(key) {
        Ok(value) => parse_bool(&value).map(Some).ok_or_else(|| {
            ToolkitError::Config(format!(
                "invalid {key} value {value}: expected true/false, yes/no, on/off or 1/0"
            ))
        }),
        Err(_) => Ok(None),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u64>().map(Some).map_err(|err| {
            ToolkitError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<usize>().map(Some).map_err(|err| {
            ToolkitError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<f64>().map(Some).map_err(|err| {
            ToolkitError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
