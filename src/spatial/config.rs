//! Index configuration.

use serde::{Deserialize, Serialize};

/// Rounding applied to `len / 2` when choosing the seed for the x scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeedRounding {
    /// `len / 2` rounded down.
    #[default]
    Floor,
    /// `len / 2` rounded up, clamped to the last position.
    Ceil,
}

/// Relative order of points that share an x coordinate in the sorted index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum XTieBreak {
    /// Sort by x only; equal-x points land in whatever order the sort leaves them.
    Unspecified,
    /// Sort by x, then by y. Reproducible across builds of the same input.
    #[default]
    ThenY,
}

/// Configuration for a nearest-neighbor index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexConfig {
    /// Seed rounding for the x-proximity scan.
    pub seed_rounding: SeedRounding,
    /// Ordering among equal-x points.
    pub x_tie_break: XTieBreak,
}

impl IndexConfig {
    /// Create a configuration from its parts.
    pub fn new(seed_rounding: SeedRounding, x_tie_break: XTieBreak) -> Self {
        Self {
            seed_rounding,
            x_tie_break,
        }
    }

    /// Create the default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }
}
