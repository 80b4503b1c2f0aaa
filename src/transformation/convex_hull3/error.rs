/// Errors that can occur during convex hull computation.
///
/// Pore hulls are built from the offset vertices of the throats surrounding a pore.
/// Such point sets are frequently degenerate: a pore on the edge of the domain may
/// only be bounded by coplanar throats, and tiny throats collapse to nearly
/// identical vertices. These situations are reported here so that callers can
/// decide on a fallback for the affected pore only.
///
/// # Example
///
/// ```
/// use porevox::transformation::{try_convex_hull, ConvexHullError};
/// use porevox::math::Point;
///
/// let flat = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
/// ];
///
/// match try_convex_hull(&flat) {
///     Err(ConvexHullError::Degenerate { dimension }) => assert_eq!(dimension, 2),
///     _ => unreachable!(),
/// }
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvexHullError {
    /// An internal error occurred during convex hull computation.
    ///
    /// This is usually caused by rounding errors on nearly degenerate inputs. The
    /// hull computation already retries on joggled copies of the input before
    /// reporting it.
    #[error("Internal error: {0}")]
    InternalError(&'static str),

    /// The input contains a point with a NaN or infinite coordinate.
    #[error("The input point {0} has a non-finite coordinate.")]
    NonFinitePoint(usize),

    /// Less than four points were given to the convex-hull algorithm.
    #[error("Less than 4 points were given to the convex-hull algorithm.")]
    IncompleteInput,

    /// The points span an affine subspace of dimension lower than 3.
    ///
    /// `dimension` is 0 if all points coincide, 1 if they are collinear, and 2 if
    /// they are coplanar.
    #[error("The input points are degenerate: they span a subspace of dimension {dimension}.")]
    Degenerate {
        /// The dimension of the affine subspace spanned by the points.
        dimension: usize,
    },

    /// A triangle edge of the hull is not shared by another triangle.
    #[error("Detected unfinished triangle {0}")]
    UnfinishedTriangle(usize),

    /// An edge of the hull is shared by more than two triangles.
    #[error("Detected t-junction for triangle {0}, edge: ({1}, {2})")]
    TJunction(usize, u32, u32),
}
