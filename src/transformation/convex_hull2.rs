use crate::math::Real;
use core::cmp::Ordering;
use na::Point2;

/// Computes the convex hull of a set of 2d points.
///
/// Returns the indices of the hull vertices in counter-clockwise order, starting
/// with the lexicographically smallest point. Duplicate points are only reported
/// once, and points lying inside the hull or on one of its edges are never part of
/// the result.
///
/// If less than three distinct points are given, the distinct points are returned in
/// lexicographic order.
pub fn convex_hull2_idx(points: &[Point2<Real>]) -> Vec<usize> {
    let mut sorted: Vec<usize> = (0..points.len()).collect();
    sorted.sort_by(|a, b| lexicographic_cmp(&points[*a], &points[*b]).then(a.cmp(b)));
    sorted.dedup_by(|a, b| points[*a] == points[*b]);

    if sorted.len() < 3 {
        return sorted;
    }

    // Andrew's monotone chain: the lower hull followed by the upper hull.
    let mut hull: Vec<usize> = Vec::with_capacity(sorted.len() + 1);

    for &i in &sorted {
        pop_non_left_turns(&mut hull, points, i, 2);
        hull.push(i);
    }

    let lower_len = hull.len() + 1;
    for &i in sorted.iter().rev().skip(1) {
        pop_non_left_turns(&mut hull, points, i, lower_len);
        hull.push(i);
    }

    // The last point is the first one again.
    let _ = hull.pop();
    hull
}

fn pop_non_left_turns(hull: &mut Vec<usize>, points: &[Point2<Real>], next: usize, min_len: usize) {
    while hull.len() >= min_len {
        let a = &points[hull[hull.len() - 2]];
        let b = &points[hull[hull.len() - 1]];

        if (b - a).perp(&(points[next] - b)) > 0.0 {
            break;
        }

        let _ = hull.pop();
    }
}

fn lexicographic_cmp(a: &Point2<Real>, b: &Point2<Real>) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}
