use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// Returns the index of the support point of an indexed list of points.
pub fn indexed_support_point_id<I>(
    direction: &Vector<Real>,
    points: &[Point<Real>],
    idx: I,
) -> Option<usize>
where
    I: Iterator<Item = usize>,
{
    let mut argmax = None;
    let mut max = -Real::MAX;

    for i in idx {
        let dot = direction.dot(&points[i].coords);

        if dot > max {
            argmax = Some(i);
            max = dot;
        }
    }

    argmax
}

/// Scale and center the given set of point depending on their AABB.
///
/// Returns the center and diagonal length of the original AABB, or `None` if the
/// diagonal is zero (all the points coincide, or the input is empty).
pub fn normalize(coords: &mut [Point<Real>]) -> Option<(Point<Real>, Real)> {
    let aabb = Aabb::from_points(coords.iter())?;
    let diag = na::distance(&aabb.mins, &aabb.maxs);
    let center = aabb.center();

    if diag == 0.0 {
        return None;
    }

    for c in coords.iter_mut() {
        *c = (*c - center.coords) / diag;
    }

    Some((center, diag))
}
