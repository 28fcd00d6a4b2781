//! Catalog loading and the in-memory catalog model.
//!
//! The catalog is read once from a JSON document of categories and tools,
//! validated, and handed out as an immutable value. Reloading the same bytes
//! produces the same uids in the same order.

pub mod icons;
pub mod loader;
pub mod model;
pub mod store;

pub use icons::category_icon;
pub use loader::{load, load_from_path};
pub use model::{Catalog, Category, NO_TAGS_SENTINEL, Tool};
pub use store::{BytesSource, CatalogSnapshot, CatalogSource, CatalogStore, FileSource};

/// Default relative path to the bundled catalog.
pub const DEFAULT_CATALOG_PATH: &str = "data/osint_tools.json";
