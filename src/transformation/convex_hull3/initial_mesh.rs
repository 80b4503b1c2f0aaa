use super::{ConvexHullError, TriangleFacet};
use crate::math::{Point, Real};
use crate::transformation::convex_hull_utils::indexed_support_point_id;

/// Finds a non-degenerate tetrahedron of the input, oriented outward.
///
/// The `points` are expected to be normalized (centered and scaled to a unit
/// diagonal) so that `eps` is a relative tolerance.
pub fn try_get_initial_mesh(
    points: &[Point<Real>],
    eps: Real,
) -> Result<Vec<TriangleFacet>, ConvexHullError> {
    let all = 0..points.len();

    // First edge: the two extreme points along the widest axis.
    let mut widest = (0, 0, -1.0);
    for axis in 0..3 {
        let dir = crate::math::Vector::ith(axis, 1.0);
        let (Some(i0), Some(i1)) = (
            indexed_support_point_id(&-dir, points, all.clone()),
            indexed_support_point_id(&dir, points, all.clone()),
        ) else {
            return Err(ConvexHullError::IncompleteInput);
        };
        let width = points[i1][axis] - points[i0][axis];

        if width > widest.2 {
            widest = (i0, i1, width);
        }
    }

    let (i0, i1, width) = widest;
    if width <= eps {
        return Err(ConvexHullError::Degenerate { dimension: 0 });
    }

    // Third point: the furthest from the line (i0, i1).
    let dir = (points[i1] - points[i0]).normalize();
    let mut i2 = None;
    let mut max_dist = eps;
    for (i, pt) in points.iter().enumerate() {
        let dist = (pt - points[i0]).cross(&dir).norm();
        if dist > max_dist {
            max_dist = dist;
            i2 = Some(i);
        }
    }

    let Some(i2) = i2 else {
        return Err(ConvexHullError::Degenerate { dimension: 1 });
    };

    // Fourth point: the furthest from the plane (i0, i1, i2).
    let plane = TriangleFacet::new(i0, i1, i2, points)
        .ok_or(ConvexHullError::InternalError("degenerate initial triangle"))?;
    let mut i3 = None;
    let mut max_dist = eps;
    for i in 0..points.len() {
        let dist = plane.distance_to_point(i, points).abs();
        if dist > max_dist {
            max_dist = dist;
            i3 = Some(i);
        }
    }

    let Some(i3) = i3 else {
        return Err(ConvexHullError::Degenerate { dimension: 2 });
    };

    let simplex = [i0, i1, i2, i3];
    let interior = na::center(
        &na::center(&points[i0], &points[i1]),
        &na::center(&points[i2], &points[i3]),
    );

    let mut facets = Vec::with_capacity(4);
    for [a, b, c] in [[i0, i1, i2], [i0, i1, i3], [i0, i2, i3], [i1, i2, i3]] {
        let facet = TriangleFacet::new(a, b, c, points)
            .ok_or(ConvexHullError::InternalError("degenerate initial facet"))?;

        if facet.normal.dot(&(interior - points[a])) > 0.0 {
            facets.push(facet.flipped());
        } else {
            facets.push(facet);
        }
    }

    // Attribute each remaining point to the facet it is the furthest above.
    for point in 0..points.len() {
        if simplex.contains(&point) {
            continue;
        }

        let mut furthest = None;
        let mut furthest_dist = eps;

        for (i, facet) in facets.iter().enumerate() {
            let dist = facet.distance_to_point(point, points);
            if dist > furthest_dist {
                furthest = Some(i);
                furthest_dist = dist;
            }
        }

        // Points seen by no facet are inside the tetrahedron.
        if let Some(furthest) = furthest {
            facets[furthest].add_visible_point(point, furthest_dist);
        }
    }

    Ok(facets)
}
