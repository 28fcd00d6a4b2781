use std::path::PathBuf;

use tempfile::TempDir;

/// Small catalog used across unit, CLI, and property tests.
///
/// Category 0 is "Search Engines" (uid `0_0` is Shodan), category 1 is
/// "Dark Web" (uid `1_0` is Ahmia), category 2 is "Archives".
pub const SAMPLE_CATALOG: &str = r#"{
  "categories": [
    {
      "name": "Search Engines",
      "tools": [
        {"name": "Shodan", "description": "Internet-connected device search engine", "url": "https://www.shodan.io", "tags": ["iot", "devices"]}
      ]
    },
    {
      "name": "Dark Web",
      "tools": [
        {"name": "Ahmia", "description": "Dark web search engine", "url": "https://ahmia.fi", "tags": ["tor"]}
      ]
    },
    {
      "name": "Archives",
      "tools": [
        {"name": "Wayback Machine", "description": "Historical snapshots of web pages", "url": "https://web.archive.org", "tags": ["history", "snapshots"]},
        {"name": "archive.today", "description": "On-demand page snapshots", "url": "https://archive.ph"}
      ]
    }
  ]
}"#;

/// Test fixture providing an isolated directory for catalogs and config.
pub struct CatalogFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for CatalogFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {root:?}");

        Self { temp_dir, root }
    }

    /// Write a file relative to the fixture root.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write a catalog at the default relative location.
    #[must_use]
    pub fn write_catalog(&self, json: &str) -> PathBuf {
        self.create_file(crate::catalog::DEFAULT_CATALOG_PATH, json)
    }

    #[must_use]
    pub fn write_sample(&self) -> PathBuf {
        self.write_catalog(SAMPLE_CATALOG)
    }

    /// Write a project `toolkit.toml`.
    #[must_use]
    pub fn write_config(&self, toml: &str) -> PathBuf {
        self.create_file(crate::config::PROJECT_CONFIG_FILE, toml)
    }
}

impl Drop for CatalogFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.root);
    }
}
