//! Conversion from flat positions arrays.
//!
//! JavaScript callers hand over coordinates as `[x0, y0, x1, y1, ...]`, the
//! same layout typed arrays use. This is the only place raw coordinates are
//! validated; everything downstream assumes finite points.

use super::point::Point;
use crate::error::PositionsError;

/// Build points from a positions array [x0, y0, x1, y1, ...].
pub fn points_from_positions(positions: &[f64]) -> Result<Vec<Point>, PositionsError> {
    if positions.len() % 2 != 0 {
        return Err(PositionsError::OddLength {
            len: positions.len(),
        });
    }

    let mut points = Vec::with_capacity(positions.len() / 2);
    for (index, pair) in positions.chunks_exact(2).enumerate() {
        let point = Point::new(pair[0], pair[1]);
        if !point.is_finite() {
            return Err(PositionsError::NonFinite {
                index,
                x: point.x,
                y: point.y,
            });
        }
        points.push(point);
    }

    Ok(points)
}

/// Flatten points back into [x0, y0, x1, y1, ...].
pub fn points_to_positions(points: &[Point]) -> Vec<f64> {
    let mut positions = Vec::with_capacity(points.len() * 2);
    for p in points {
        positions.push(p.x);
        positions.push(p.y);
    }
    positions
}
