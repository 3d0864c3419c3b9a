//! Spatial indexing for fast nearest-neighbor lookup.
//!
//! This module provides an x-sorted projection index over a static point set.
//! Queries seed from the point with the closest x coordinate and expand
//! outward, using x distance as a lower bound to prune both directions.

mod brute_force;
mod builder;
mod config;
mod index;
mod projection;

pub use brute_force::find_nearest_brute_force;
pub use builder::{build, is_sorted_by_x};
pub use config::{IndexConfig, SeedRounding, XTieBreak};
pub use index::NearestNeighborIndex;
pub use projection::{SearchStats, find_nearest_sorted, locate_nearest_x, seed_index};
