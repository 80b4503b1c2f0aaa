use crate::math::{Point, Real, Vector};
use crate::transformation::convex_hull2_idx;
use na::Point2;

/// Orders the vertices of a planar face counter-clockwise, discarding interior and
/// collinear vertices.
///
/// The face is projected onto the coordinate plane orthogonal to the largest
/// component of its normal before computing its 2d convex hull, so faces parallel to
/// any coordinate axis are handled.
pub fn order_face(face: &[Point<Real>]) -> Vec<Point<Real>> {
    let normal = face_normal(face);
    let dropped = normal.iamax();
    let (u, v) = ((dropped + 1) % 3, (dropped + 2) % 3);

    let projected: Vec<_> = face.iter().map(|pt| Point2::new(pt[u], pt[v])).collect();

    convex_hull2_idx(&projected)
        .into_iter()
        .map(|i| face[i])
        .collect()
}

/// The normal of the largest triangle `(p0, p1, p2)` where `p1` is the vertex the
/// furthest from `p0`. Independent from the order of the vertices.
///
/// Collinear faces get the coordinate axis along which they are the thinnest.
fn face_normal(face: &[Point<Real>]) -> Vector<Real> {
    let Some(p0) = face.first() else {
        return Vector::z();
    };

    let mut dir = Vector::zeros();
    for pt in face {
        let d = pt - p0;
        if d.norm_squared() > dir.norm_squared() {
            dir = d;
        }
    }

    let mut normal = Vector::zeros();
    for pt in face {
        let n = dir.cross(&(pt - p0));
        if n.norm_squared() > normal.norm_squared() {
            normal = n;
        }
    }

    if normal.norm_squared() != 0.0 {
        normal
    } else if dir.norm_squared() != 0.0 {
        // Collinear vertices: project along the axis the segment varies the least on.
        Vector::ith(dir.iamin(), 1.0)
    } else {
        Vector::z()
    }
}

/// Samples the edges of a set of faces so that consecutive samples of an edge are at
/// most `dx` apart.
///
/// Each face is first ordered with [`order_face`]. The edges of the resulting closed
/// loop are sampled with `ceil(length / dx) + 1` evenly spaced points, both endpoints
/// included. Zero-length edges emit nothing, faces with less than two distinct
/// vertices are skipped, and a sample equal to the previously emitted one is not
/// repeated.
///
/// Returns an empty set if `dx` is not strictly positive.
pub fn rasterize_faces<F: AsRef<[Point<Real>]>>(faces: &[F], dx: Real) -> Vec<Point<Real>> {
    let mut samples = Vec::new();

    if !(dx > 0.0) {
        log::warn!("Cannot rasterize faces with a sampling step of {dx}");
        return samples;
    }

    let mut last = None;

    for face in faces {
        let loop_pts = order_face(face.as_ref());

        if loop_pts.len() < 2 {
            continue;
        }

        for i in 0..loop_pts.len() {
            let a = loop_pts[i];
            let b = loop_pts[(i + 1) % loop_pts.len()];
            let length = na::distance(&a, &b);

            if length == 0.0 {
                continue;
            }

            let num_samples = (length / dx).ceil() as usize + 1;

            for s in 0..num_samples {
                let sample = if s + 1 == num_samples {
                    b
                } else {
                    a + (b - a) * (s as Real / (num_samples - 1) as Real)
                };

                if last != Some(sample) {
                    samples.push(sample);
                    last = Some(sample);
                }
            }
        }
    }

    samples
}

#[cfg(test)]
mod test {
    use super::{order_face, rasterize_faces};
    use crate::math::Point;

    #[test]
    fn vertical_face_is_ordered() {
        // A face parallel to the `z` axis would collapse to a segment in the `xy` plane.
        let face = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(0.5, 0.0, 0.5),
        ];

        let ordered = order_face(&face);
        assert_eq!(ordered.len(), 4);

        for (i, pt) in ordered.iter().enumerate() {
            // Consecutive vertices of the square share one coordinate.
            let next = ordered[(i + 1) % 4];
            assert!(pt.x == next.x || pt.z == next.z);
        }
    }

    #[test]
    fn square_samples() {
        let square = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ];

        let samples = rasterize_faces(&[square], 0.1);
        assert_eq!(samples.len(), 41);

        for w in samples.windows(2) {
            assert_ne!(w[0], w[1]);
            assert!(na::distance(&w[0], &w[1]) <= 0.1 + 1.0e-12);
        }
    }

    #[test]
    fn degenerate_faces() {
        let point = vec![Point::new(1.0, 2.0, 3.0); 3];
        assert!(rasterize_faces(&[point], 0.1).is_empty());

        let segment = vec![Point::new(0.0, 0.0, 0.0), Point::new(0.0, 0.0, 1.0)];
        // Both directions of the segment are walked.
        assert_eq!(rasterize_faces(&[segment.clone()], 0.5).len(), 5);
        assert!(rasterize_faces(&[segment], 0.0).is_empty());
    }
}
