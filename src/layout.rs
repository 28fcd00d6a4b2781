//! Card grid layout for result lists.
//!
//! The display mode is plain configuration handed in by the presentation
//! layer; nothing here inspects the terminal or any global state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToolkitError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Phone,
    Tablet,
    #[default]
    Desktop,
}

impl DisplayMode {
    /// Classify a viewport width in pixels.
    pub const fn for_viewport_width(width: u32) -> Self {
        if width <= 500 {
            Self::Phone
        } else if width <= 1000 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Cards per row.
    pub const fn columns(self) -> usize {
        match self {
            Self::Phone | Self::Desktop => 3,
            Self::Tablet => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ToolkitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "tablet" => Ok(Self::Tablet),
            "desktop" => Ok(Self::Desktop),
            other => Err(ToolkitError::Config(format!(
                "invalid display mode {other} (expected phone|tablet|desktop)"
            ))),
        }
    }
}

/// Row-major grid of item indices: `ceil(count / columns)` rows, the last
/// one possibly short.
pub fn grid(count: usize, mode: DisplayMode) -> Vec<Vec<usize>> {
    let columns = mode.columns();
    (0..count)
        .collect::<Vec<_>>()
        .chunks(columns)
        .map(<[usize]>::to_vec)
        .collect()
}
