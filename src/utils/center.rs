use crate::math::{Point, Real};

/// Computes the geometric center of a set of points.
///
/// All points are weighted equally. Returns `None` if `pts` is empty.
///
/// # Example
///
/// ```
/// use porevox::utils::center;
/// use porevox::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points).unwrap();
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-12);
/// assert!(c.z.abs() < 1e-12);
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Option<Point<Real>> {
    let (first, rest) = pts.split_first()?;
    let denom = 1.0 / pts.len() as Real;

    let mut res = *first * denom;
    for pt in rest {
        res += pt.coords * denom;
    }

    Some(res)
}
