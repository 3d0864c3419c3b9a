//! Geometric primitives.
//!
//! This module provides the 2D point type used throughout the crate and the
//! conversion from flat positions arrays coming across the JS boundary.

mod point;
mod positions;

pub use point::Point;
pub use positions::{points_from_positions, points_to_positions};
