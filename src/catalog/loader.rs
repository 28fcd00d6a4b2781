//! One-shot catalog loading.
//!
//! Parsing and validation happen together: a `Catalog` is only returned once
//! every category and tool has been checked and given its uid, so callers never
//! see a partially populated catalog.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::catalog::model::{Catalog, Category, RawCatalog, RawCategory, Tool};
use crate::error::{Result, ToolkitError};

/// Parse catalog bytes into an immutable [`Catalog`].
pub fn load(bytes: &[u8]) -> Result<Catalog> {
    let raw: RawCatalog = serde_json::from_slice(bytes)
        .map_err(|err| ToolkitError::MalformedSource(err.to_string()))?;
    validate_category_names(&raw.categories)?;

    let categories = raw
        .categories
        .into_iter()
        .enumerate()
        .map(|(ci, category)| build_category(ci, category))
        .collect::<Result<Vec<_>>>()?;

    let catalog = Catalog::from_categories(categories);
    debug!(
        target: "catalog",
        categories = catalog.categories().len(),
        tools = catalog.tool_count(),
        "catalog parsed"
    );
    Ok(catalog)
}

/// Read and parse a catalog file.
///
/// A missing file is reported as [`ToolkitError::SourceNotFound`] so operators
/// can tell it apart from a corrupt one.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(ToolkitError::SourceNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    let catalog = load(&bytes).map_err(|err| match err {
        ToolkitError::MalformedSource(msg) => {
            ToolkitError::MalformedSource(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;
    info!(
        target: "catalog",
        path = %path.display(),
        tools = catalog.tool_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn validate_category_names(categories: &[RawCategory]) -> Result<()> {
    let mut seen = HashSet::new();
    for category in categories {
        if !seen.insert(category.name.as_str()) {
            return Err(ToolkitError::MalformedSource(format!(
                "duplicate category name '{}'",
                category.name
            )));
        }
    }
    Ok(())
}

fn build_category(ci: usize, raw: RawCategory) -> Result<Category> {
    let mut tools = Vec::with_capacity(raw.tools.len());
    for (ti, tool) in raw.tools.into_iter().enumerate() {
        if tool.name.trim().is_empty() {
            return Err(ToolkitError::MalformedSource(format!(
                "tool {ti} in category '{}' has an empty name",
                raw.name
            )));
        }
        tools.push(Tool {
            uid: format!("{ci}_{ti}"),
            name: tool.name,
            description: tool.description,
            url: tool.url,
            tags: tool.tags.unwrap_or_default(),
            category: raw.name.clone(),
        });
    }
    Ok(Category {
        name: raw.name,
        tools,
    })
}
