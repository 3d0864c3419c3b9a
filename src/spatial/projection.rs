//! Projection search over an x-sorted point slice.
//!
//! The search runs in two phases:
//!
//! 1. **Seed selection:** starting from the middle of the slice, walk left and
//!    then right to the position whose x coordinate is closest to the query.
//!    Since the slice is sorted, `|x - query.x|` only shrinks and then grows
//!    along either direction, so each walk stops at the first increase.
//! 2. **Divergent expansion:** from the seed, walk left and then right,
//!    keeping the closest point seen. A point's x distance is a lower bound
//!    on its Euclidean distance, so a side is abandoned as soon as that bound
//!    exceeds the best distance found so far.
//!
//! Distances are compared squared; the square root is only taken when the
//! best candidate changes, to refresh the pruning bound.

use super::config::SeedRounding;
use crate::geometry::Point;

/// Bookkeeping from a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Sorted position the expansion started from (None for an empty index).
    pub seed: Option<usize>,
    /// Number of points whose full distance to the query was computed.
    pub examined: usize,
}

/// Starting position for the seed scan.
pub fn seed_index(len: usize, rounding: SeedRounding) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let mid = match rounding {
        SeedRounding::Floor => len / 2,
        SeedRounding::Ceil => len.div_ceil(2).min(len - 1),
    };
    Some(mid)
}

/// Find the position in `sorted` whose x coordinate is closest to `query_x`.
///
/// Returns None only when `sorted` is empty. Among positions with equal x
/// distance, the first one reached wins.
pub fn locate_nearest_x(sorted: &[Point], query_x: f64, rounding: SeedRounding) -> Option<usize> {
    let start = seed_index(sorted.len(), rounding)?;

    let mut best_idx = start;
    let mut best_dx = (sorted[start].x - query_x).abs();

    for i in (0..start).rev() {
        let dx = (sorted[i].x - query_x).abs();
        // Past the closest x on this side
        if dx > best_dx {
            break;
        }
        if dx < best_dx {
            best_dx = dx;
            best_idx = i;
        }
    }

    // Closer on the left means start sits right of the minimum, and nothing
    // further right can beat it.
    if best_idx != start {
        return Some(best_idx);
    }

    for (i, p) in sorted.iter().enumerate().skip(start + 1) {
        let dx = (p.x - query_x).abs();
        if dx > best_dx {
            break;
        }
        if dx < best_dx {
            best_dx = dx;
            best_idx = i;
        }
    }

    Some(best_idx)
}

/// Running best candidate during the expansion.
struct Nearest {
    point: Point,
    dist_sq: f64,
    /// Pruning bound, kept equal to `dist_sq.sqrt()`.
    dist: f64,
    examined: usize,
}

impl Nearest {
    fn new(point: Point, query: &Point) -> Self {
        let dist_sq = point.dist_sq(query);
        Self {
            point,
            dist_sq,
            dist: dist_sq.sqrt(),
            examined: 1,
        }
    }

    /// Consider `candidate`. Returns false when its x distance alone rules it
    /// out, which also rules out everything beyond it on the same side.
    #[inline]
    fn offer(&mut self, candidate: Point, query: &Point) -> bool {
        let dx = (candidate.x - query.x).abs();
        if dx > self.dist {
            return false;
        }

        let dy = candidate.y - query.y;
        let dist_sq = dx * dx + dy * dy;
        self.examined += 1;

        // Strictly closer only: equal distances keep the earlier candidate
        if dist_sq < self.dist_sq {
            self.point = candidate;
            self.dist_sq = dist_sq;
            self.dist = dist_sq.sqrt();
        }
        true
    }
}

/// Find the point in `sorted` closest to `query`.
///
/// `sorted` must be in non-decreasing x order. Returns None for an empty
/// slice, along with the stats of the search.
pub fn find_nearest_sorted(
    sorted: &[Point],
    query: Point,
    rounding: SeedRounding,
) -> (Option<Point>, SearchStats) {
    let Some(seed) = locate_nearest_x(sorted, query.x, rounding) else {
        return (None, SearchStats::default());
    };

    let mut nearest = Nearest::new(sorted[seed], &query);

    for &candidate in sorted[..seed].iter().rev() {
        if !nearest.offer(candidate, &query) {
            break;
        }
    }

    for &candidate in &sorted[seed + 1..] {
        if !nearest.offer(candidate, &query) {
            break;
        }
    }

    let stats = SearchStats {
        seed: Some(seed),
        examined: nearest.examined,
    };
    (Some(nearest.point), stats)
}
