use crate::math::{Point, Real};
use crate::utils::hashmap::{Entry, HashMap};

/// The number of decimals kept when merging duplicate points before triangulation.
pub const DEDUP_DECIMALS: i32 = 10;

/// Removes duplicate points, comparing coordinates rounded to `decimals` decimals.
///
/// The first occurrence of every point is kept, in input order, with its rounded
/// coordinates. Points closer than the rounding precision break the hull construction
/// and must be merged first.
pub fn unique_points(points: &[Point<Real>], decimals: i32) -> Vec<Point<Real>> {
    let scale = (10.0 as Real).powi(decimals);
    let mut seen = HashMap::with_capacity_and_hasher(points.len(), Default::default());
    let mut result = Vec::with_capacity(points.len());

    for pt in points {
        let rounded = pt.map(|c| (c * scale).round() / scale);
        let key = rounded.coords.map(|c| {
            // Normalize the sign of zero so that -0.0 and 0.0 are merged.
            if c == 0.0 { 0u64 } else { c.to_bits() }
        });

        if let Entry::Vacant(e) = seen.entry([key.x, key.y, key.z]) {
            let _ = e.insert(());
            result.push(rounded);
        }
    }

    result
}
