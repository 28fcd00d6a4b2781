//! Error types for toolkit.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ToolkitError>;

#[derive(Error, Debug)]
pub enum ToolkitError {
    /// The catalog file does not exist.
    #[error("catalog source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The catalog file exists but does not have the expected shape.
    #[error("malformed catalog source: {0}")]
    MalformedSource(String),

    #[error("tool not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolkitError {
    /// Stable machine-readable code used in robot output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SourceNotFound(_) => "source_not_found",
            Self::MalformedSource(_) => "malformed_source",
            Self::NotFound(_) => "not_found",
            Self::Config(_) => "config_error",
            Self::Io(_) | Self::Serialization(_) => "error",
        }
    }
}
