//! toolkit - browse and fuzzy-search a curated catalog of tools
//!
//! The library loads a categorized JSON catalog, scores tools against a
//! query with a partial-ratio fuzzy match, and memoizes both the catalog and
//! recent results. The `toolkit` binary is a thin CLI over it.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod search;
pub mod test_utils;

pub use error::{Result, ToolkitError};
