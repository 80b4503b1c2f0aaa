use super::{check_convex_hull, try_get_initial_mesh, ConvexHullError, TriangleFacet};
use crate::math::{Point, Real};
use crate::transformation::convex_hull_utils::normalize;
use crate::utils;
use crate::utils::hashmap::HashMap;

/// Tolerance, relative to the diagonal of the input, under which a point is considered
/// to lie on a facet's plane.
const HULL_EPSILON: Real = 1.0e-10;
/// Tolerance of the final containment check, relative to the diagonal of the input.
const CONTAINMENT_EPSILON: Real = 1.0e-8;
/// Relative magnitude of the random perturbation applied when the hull has to be
/// recomputed on a joggled input.
const JOGGLE_MAGNITUDE: Real = 1.0e-9;
const MAX_JOGGLE_ATTEMPTS: u32 = 3;
const JOGGLE_SEED: u64 = 0x5eed_f1b5_e0a1_b00c;

/// Computes the convex hull of a set of 3d points.
///
/// Returns the hull vertices and its triangles, oriented counter-clockwise when seen
/// from the outside. Degenerate inputs (less than four points, or points that are all
/// coplanar) yield an error.
///
/// Topological failures caused by rounding errors are recovered from by joggling the
/// input: the hull connectivity is computed again after a tiny deterministic random
/// perturbation of the points, and the original points are used for the output
/// vertices.
pub fn try_convex_hull(
    points: &[Point<Real>],
) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError> {
    if points.len() < 4 {
        return Err(ConvexHullError::IncompleteInput);
    }

    if let Some(bad) = points.iter().position(|pt| !pt.iter().all(|c| c.is_finite())) {
        return Err(ConvexHullError::NonFinitePoint(bad));
    }

    let mut normalized_points = points.to_vec();
    if normalize(&mut normalized_points[..]).is_none() {
        return Err(ConvexHullError::Degenerate { dimension: 0 });
    }

    let mut result = convex_hull_connectivity(&normalized_points);
    let mut rng = oorandom::Rand64::new(JOGGLE_SEED as u128);

    for attempt in 1..=MAX_JOGGLE_ATTEMPTS {
        let Err(ConvexHullError::InternalError(msg)) = &result else {
            break;
        };

        log::debug!("Convex hull failed ({msg}), joggling input: attempt {attempt}");
        let magnitude = JOGGLE_MAGNITUDE * (10.0 as Real).powi(attempt as i32 - 1);
        let joggled: Vec<_> = normalized_points
            .iter()
            .map(|pt| pt.map(|c| c + (rng.rand_float() * 2.0 - 1.0) * magnitude))
            .collect();
        result = convex_hull_connectivity(&joggled);
    }

    let mut idx = result?;
    let mut vertices = points.to_vec();
    utils::remove_unused_points(&mut vertices, &mut idx[..]);

    Ok((vertices, idx))
}

/// Computes the triangles of the convex hull of normalized points, indexing `points`.
fn convex_hull_connectivity(points: &[Point<Real>]) -> Result<Vec<[u32; 3]>, ConvexHullError> {
    let mut facets = try_get_initial_mesh(points, HULL_EPSILON)?;
    // Maps each directed edge of the current hull to the facet it belongs to.
    let mut edges = HashMap::default();

    for (id, facet) in facets.iter().enumerate() {
        for e in 0..3 {
            if edges.insert(facet.edge(e), id).is_some() {
                return Err(ConvexHullError::InternalError("inconsistent initial mesh"));
            }
        }
    }

    let mut pending: Vec<usize> = (0..facets.len()).collect();
    let mut visible = Vec::new();
    let mut horizon = Vec::new();
    let mut stack = Vec::new();

    while let Some(facet_id) = pending.pop() {
        if !facets[facet_id].valid {
            continue;
        }

        let Some(eye) = facets[facet_id].furthest_point else {
            continue;
        };

        // Flood the set of facets that can be seen from `eye`; its boundary is the horizon.
        visible.clear();
        horizon.clear();
        stack.clear();
        facets[facet_id].valid = false;
        visible.push(facet_id);
        stack.push(facet_id);

        while let Some(curr) = stack.pop() {
            for e in 0..3 {
                let (a, b) = facets[curr].edge(e);
                let adj = *edges
                    .get(&(b, a))
                    .ok_or(ConvexHullError::InternalError("open hull edge"))?;

                if !facets[adj].valid {
                    // Already part of the visible set.
                    continue;
                }

                if facets[adj].distance_to_point(eye, points) > HULL_EPSILON {
                    facets[adj].valid = false;
                    visible.push(adj);
                    stack.push(adj);
                } else {
                    horizon.push((a, b));
                }
            }
        }

        for &f in &visible {
            for e in 0..3 {
                let _ = edges.remove(&facets[f].edge(e));
            }
        }

        // Cone the horizon to the eye point.
        let first_new = facets.len();
        for &(a, b) in &horizon {
            let facet = TriangleFacet::new(a, b, eye, points)
                .ok_or(ConvexHullError::InternalError("affinely dependent facet"))?;
            let id = facets.len();

            for e in 0..3 {
                if edges.insert(facet.edge(e), id).is_some() {
                    return Err(ConvexHullError::InternalError("non-manifold horizon"));
                }
            }

            facets.push(facet);
        }

        // Hand the points seen by the removed facets over to the new ones.
        for &f in &visible {
            let orphans = core::mem::take(&mut facets[f].visible_points);

            for point in orphans {
                if point == eye {
                    continue;
                }

                let mut furthest = None;
                let mut furthest_dist = HULL_EPSILON;

                for (i, new_facet) in facets[first_new..].iter().enumerate() {
                    let dist = new_facet.distance_to_point(point, points);
                    if dist > furthest_dist {
                        furthest = Some(first_new + i);
                        furthest_dist = dist;
                    }
                }

                // If none of the new facets can be seen from the point, it is inside the hull.
                if let Some(furthest) = furthest {
                    facets[furthest].add_visible_point(point, furthest_dist);
                }
            }
        }

        pending.extend(first_new..facets.len());
    }

    let hull: Vec<&TriangleFacet> = facets.iter().filter(|f| f.valid).collect();

    // Rounding errors may have discarded a point that was slightly outside.
    for i in 0..points.len() {
        if hull
            .iter()
            .any(|f| f.distance_to_point(i, points) > CONTAINMENT_EPSILON)
        {
            return Err(ConvexHullError::InternalError("point outside of the hull"));
        }
    }

    let idx: Vec<[u32; 3]> = hull
        .iter()
        .map(|f| [f.pts[0] as u32, f.pts[1] as u32, f.pts[2] as u32])
        .collect();

    check_convex_hull(&idx).map_err(|_| ConvexHullError::InternalError("invalid hull topology"))?;

    Ok(idx)
}
