//! Nearest-neighbor index over a static point set.
//!
//! Holds the points as supplied and their x-sorted projection. Both are fixed
//! at construction; queries only read them, so one index can serve any number
//! of threads at once.

use log::{debug, trace};

use super::brute_force;
use super::builder;
use super::config::IndexConfig;
use super::projection::{self, SearchStats};
use crate::geometry::Point;

/// Nearest-neighbor index.
///
/// Uses an x-sorted projection with pruned bidirectional scans, so a typical
/// query examines far fewer than all points.
#[derive(Debug, Clone)]
pub struct NearestNeighborIndex {
    /// Points in the order they were supplied.
    points: Vec<Point>,
    /// The same points in non-decreasing x order.
    sorted: Vec<Point>,
    config: IndexConfig,
}

impl NearestNeighborIndex {
    /// Index `points` with the default configuration.
    pub fn new(points: Vec<Point>) -> Self {
        Self::with_config(points, IndexConfig::default())
    }

    /// Index `points` with the given configuration.
    pub fn with_config(points: Vec<Point>, config: IndexConfig) -> Self {
        let sorted = builder::build(&points, config.x_tie_break);
        debug!(
            "indexed {} points (seed rounding {:?}, x tie break {:?})",
            sorted.len(),
            config.seed_rounding,
            config.x_tie_break
        );

        Self {
            points,
            sorted,
            config,
        }
    }

    /// Find the indexed point closest to `query`.
    ///
    /// Returns None if the index is empty.
    pub fn find_nearest(&self, query: Point) -> Option<Point> {
        self.find_nearest_with_stats(query).0
    }

    /// Find the closest point, also reporting how the search went.
    pub fn find_nearest_with_stats(&self, query: Point) -> (Option<Point>, SearchStats) {
        let (nearest, stats) =
            projection::find_nearest_sorted(&self.sorted, query, self.config.seed_rounding);
        trace!(
            "query {} -> {:?} (seed {:?}, examined {}/{})",
            query,
            nearest,
            stats.seed,
            stats.examined,
            self.sorted.len()
        );
        (nearest, stats)
    }

    /// Find the closest point, but only if it lies within `max_distance`.
    ///
    /// A negative or NaN `max_distance` matches nothing.
    pub fn find_nearest_within(&self, query: Point, max_distance: f64) -> Option<Point> {
        if !(max_distance >= 0.0) {
            return None;
        }
        let max_distance_sq = max_distance * max_distance;
        self.find_nearest(query)
            .filter(|point| point.dist_sq(&query) <= max_distance_sq)
    }

    /// Find the point closest to `query` by checking every point.
    ///
    /// Independent of any index; the reference the indexed search must agree
    /// with whenever the nearest point is unique.
    pub fn find_nearest_brute_force(query: Point, points: &[Point]) -> Option<Point> {
        brute_force::find_nearest_brute_force(query, points)
    }

    /// Points in the order they were supplied.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points in non-decreasing x order.
    pub fn sorted_points(&self) -> &[Point] {
        &self.sorted
    }

    /// The configuration the index was built with.
    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Smallest and largest x coordinate, or None if empty.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        match (self.sorted.first(), self.sorted.last()) {
            (Some(first), Some(last)) => Some((first.x, last.x)),
            _ => None,
        }
    }

    /// Get the number of indexed points.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

impl Default for NearestNeighborIndex {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<Point> for NearestNeighborIndex {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
