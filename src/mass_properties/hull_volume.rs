use crate::math::{Point, Real, Vector};
use crate::transformation::{try_convex_hull, ConvexHullError};
use crate::utils::{self, DEDUP_DECIMALS};
use num::Zero;

/// The volume and center of mass of the convex hull of a set of points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HullProperties {
    /// The volume enclosed by the hull. Always finite and non-negative.
    pub volume: Real,
    /// The center of mass of the hull, in the same frame as the input points.
    pub centroid: Point<Real>,
}

impl HullProperties {
    /// Properties with a zero volume, centered at `centroid`.
    pub fn empty(centroid: Point<Real>) -> Self {
        Self {
            volume: 0.0,
            centroid,
        }
    }
}

/// Computes the volume and centroid of the convex hull of `points`.
///
/// The hull is split into pyramids joining each of its triangles to the mean of the
/// (de-duplicated) input points. The pyramid volumes are summed, and the centroid is
/// obtained by weighting the pyramid centers of mass with their volumes.
///
/// If the hull cannot be computed, because there are less than four distinct points
/// or the points do not span a volume, the volume is zero and the centroid is the
/// mean of the input points. See [`try_hull_volume_and_centroid`] to get the error
/// instead.
///
/// # Example
///
/// ```
/// # #[macro_use] extern crate approx;
/// use porevox::mass_properties::hull_volume_and_centroid;
/// use porevox::math::Point;
///
/// let mut cube = Vec::new();
/// for i in 0..8 {
///     cube.push(Point::new((i & 1) as f64, ((i >> 1) & 1) as f64, (i >> 2) as f64));
/// }
///
/// let props = hull_volume_and_centroid(&cube);
/// assert_relative_eq!(props.volume, 1.0, epsilon = 1.0e-12);
/// assert_relative_eq!(props.centroid, Point::new(0.5, 0.5, 0.5), epsilon = 1.0e-12);
/// ```
pub fn hull_volume_and_centroid(points: &[Point<Real>]) -> HullProperties {
    match try_hull_volume_and_centroid(points) {
        Ok(props) => props,
        Err(err) => {
            log::debug!(
                "No hull volume for a set of {} points: {err}",
                points.len()
            );
            HullProperties::empty(utils::center(points).unwrap_or_else(Point::origin))
        }
    }
}

/// Computes the volume and centroid of the convex hull of `points`, reporting why
/// the hull could not be built if it is degenerate.
pub fn try_hull_volume_and_centroid(
    points: &[Point<Real>],
) -> Result<HullProperties, ConvexHullError> {
    let points = utils::unique_points(points, DEDUP_DECIMALS);
    let apex = utils::center(&points).ok_or(ConvexHullError::IncompleteInput)?;
    let (vertices, triangles) = try_convex_hull(&points)?;

    let mut volume = Real::zero();
    let mut weighted_com = Vector::zeros();

    for tri in &triangles {
        let a = vertices[tri[0] as usize];
        let b = vertices[tri[1] as usize];
        let c = vertices[tri[2] as usize];

        let ab = b - a;
        let ac = c - a;
        let Some(normal) = ab.cross(&ac).try_normalize(0.0) else {
            continue;
        };

        let face_center = Point::from((a.coords + b.coords + c.coords) / 3.0);
        let area = heron_area(ab.norm(), (c - b).norm(), ac.norm());
        let pyramid = (face_center - apex).dot(&normal).abs() * area / 3.0;

        volume += pyramid;
        weighted_com += ((a - apex) + (b - apex) + (c - apex)) * (pyramid / 4.0);
    }

    if !volume.is_finite() || volume.is_zero() {
        return Ok(HullProperties::empty(apex));
    }

    Ok(HullProperties {
        volume,
        centroid: apex + weighted_com / volume,
    })
}

fn heron_area(a: Real, b: Real, c: Real) -> Real {
    let s = (a + b + c) * 0.5;
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}
