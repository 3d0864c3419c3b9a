//! Linear-scan nearest neighbor.
//!
//! Checks every point. Used as the correctness reference for the projection
//! search and for one-off lookups over unsorted data.

use crate::geometry::Point;

/// Find the point in `points` closest to `query`.
///
/// Distances are compared squared, which orders points exactly as Euclidean
/// distance does without losing precision to `sqrt`. Keeps the first point
/// seen among equally distant ones. Returns None when `points` is empty.
pub fn find_nearest_brute_force(query: Point, points: &[Point]) -> Option<Point> {
    let mut best: Option<(f64, Point)> = None;

    for &candidate in points {
        let dist_sq = candidate.dist_sq(&query);
        match best {
            Some((min_dist_sq, _)) if dist_sq >= min_dist_sq => {}
            _ => best = Some((dist_sq, candidate)),
        }
    }

    best.map(|(_, point)| point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_basic() {
        let points = vec![
            Point::new(1.0, 2.0),
            Point::new(1.0, 0.0),
            Point::new(10.0, 5.0),
        ];
        assert_eq!(
            find_nearest_brute_force(Point::new(0.0, 0.0), &points),
            Some(Point::new(1.0, 0.0))
        );
    }

    #[test]
    fn test_brute_force_empty() {
        assert_eq!(find_nearest_brute_force(Point::new(0.0, 0.0), &[]), None);
    }

    #[test]
    fn test_brute_force_separates_distances_equal_after_sqrt() {
        // Squared distances 1 + 2^-52 and 1 both have a square root of
        // exactly 1.0; only the second point is truly nearest.
        let tiny = 2f64.powi(-26);
        let farther = Point::new(1.0, tiny);
        let nearer = Point::new(1.0, 0.0);
        let query = Point::new(0.0, 0.0);
        assert_eq!(farther.dist(&query), nearer.dist(&query));
        assert!(farther.dist_sq(&query) > nearer.dist_sq(&query));

        let points = vec![farther, nearer];
        assert_eq!(find_nearest_brute_force(query, &points), Some(nearer));
    }

    #[test]
    fn test_brute_force_keeps_first_tie() {
        let points = vec![Point::new(1.0, 0.0), Point::new(-1.0, 0.0), Point::new(0.0, 1.0)];
        assert_eq!(
            find_nearest_brute_force(Point::new(0.0, 0.0), &points),
            Some(Point::new(1.0, 0.0))
        );
    }
}
