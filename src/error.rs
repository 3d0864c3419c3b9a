//! Error types for loading point data.
//!
//! The search itself is total over well-formed points and never fails. Errors
//! only arise where raw coordinates enter the crate.

use thiserror::Error;

/// Errors produced when turning a flat positions array into points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionsError {
    /// The array does not hold whole (x, y) pairs.
    #[error("positions must hold x,y pairs, got {len} values")]
    OddLength {
        /// Number of values supplied.
        len: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {index} has non-finite coordinates ({x}, {y})")]
    NonFinite {
        /// Index of the offending point (not of the raw value).
        index: usize,
        /// X coordinate as supplied.
        x: f64,
        /// Y coordinate as supplied.
        y: f64,
    },
}
