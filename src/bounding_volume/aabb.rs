//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// The box is defined by its minimum and maximum corners. It is used to find the
/// extent of the throat vertices of a network, which determines both the origin
/// and the size of the voxel images, and the true domain volume used by the
/// conservation correction.
///
/// # Example
///
/// ```
/// use porevox::bounding_volume::Aabb;
/// use porevox::math::Point;
///
/// let faces = vec![
///     vec![Point::new(1.0, 2.0, 3.0), Point::new(-1.0, 4.0, 2.0)],
///     vec![Point::new(0.0, 0.0, 5.0)],
/// ];
/// let aabb = Aabb::from_point_groups(&faces).unwrap();
///
/// assert_eq!(aabb.mins, Point::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point::new(1.0, 4.0, 5.0));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// Each component of `mins` should be smaller than the corresponding component of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::MAX` and `maxs` components
    /// set to `-Real::MAX`.
    ///
    /// Merging any point into it yields the AABB of that single point.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Computes the AABB of a set of points, or `None` if it is empty.
    pub fn from_points<'a, I>(pts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut aabb = Self::new_invalid();
        let mut any = false;

        for pt in pts {
            aabb.take_point(*pt);
            any = true;
        }

        any.then_some(aabb)
    }

    /// The vertex range of a sequence of point groups.
    ///
    /// Each group is typically the vertex loop of a single throat. Empty groups are
    /// ignored; `None` is returned if all of them are empty.
    pub fn from_point_groups<G>(groups: &[G]) -> Option<Self>
    where
        G: AsRef<[Point<Real>]>,
    {
        Self::from_points(groups.iter().flat_map(|g| g.as_ref().iter()))
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Checks whether this AABB contains the point `point`, boundaries included.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        (0..3).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxs[i])
    }
}
