//! Sorted x projection of a point set.
//!
//! The index is nothing more than the input points reordered so that
//! `sorted[i].x <= sorted[i + 1].x`. It is built once and never touched again.

use super::config::XTieBreak;
use crate::geometry::Point;

/// Build the x-sorted projection of `points`.
///
/// The input slice is left untouched. Ordering uses `f64::total_cmp`, which is
/// a total order and agrees with `<` on finite values.
pub fn build(points: &[Point], tie_break: XTieBreak) -> Vec<Point> {
    let mut sorted = points.to_vec();

    match tie_break {
        XTieBreak::Unspecified => {
            sorted.sort_unstable_by(|a, b| a.x.total_cmp(&b.x));
        }
        XTieBreak::ThenY => {
            sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        }
    }

    debug_assert!(is_sorted_by_x(&sorted));
    sorted
}

/// Check that `points` is in non-decreasing x order.
pub fn is_sorted_by_x(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0].x <= w[1].x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Point> {
        vec![
            Point::new(1.0, 2.0),
            Point::new(1.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(-1000.0, 20.0),
            Point::new(3.14159, 42.0),
            Point::new(42.0, 3.14159),
        ]
    }

    #[test]
    fn test_build_sorts_by_x() {
        let sorted = build(&sample(), XTieBreak::Unspecified);
        assert_eq!(sorted.len(), 6);
        assert!(is_sorted_by_x(&sorted));
        assert_eq!(sorted[0], Point::new(-1000.0, 20.0));
        assert_eq!(sorted[5], Point::new(42.0, 3.14159));
    }

    #[test]
    fn test_build_then_y() {
        let sorted = build(&sample(), XTieBreak::ThenY);
        assert_eq!(
            sorted,
            vec![
                Point::new(-1000.0, 20.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 2.0),
                Point::new(3.14159, 42.0),
                Point::new(10.0, 5.0),
                Point::new(42.0, 3.14159),
            ]
        );
    }

    #[test]
    fn test_build_keeps_input() {
        let points = sample();
        let _ = build(&points, XTieBreak::ThenY);
        assert_eq!(points, sample());
    }

    #[test]
    fn test_build_empty() {
        assert!(build(&[], XTieBreak::ThenY).is_empty());
        assert!(is_sorted_by_x(&[]));
    }

    #[test]
    fn test_build_keeps_duplicates() {
        let points = vec![Point::new(2.0, 2.0), Point::new(2.0, 2.0), Point::new(1.0, 1.0)];
        let sorted = build(&points, XTieBreak::ThenY);
        assert_eq!(
            sorted,
            vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(2.0, 2.0)]
        );
    }
}
