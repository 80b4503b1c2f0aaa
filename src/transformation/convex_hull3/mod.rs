pub use self::convex_hull::try_convex_hull;
pub use self::error::ConvexHullError;
use self::initial_mesh::try_get_initial_mesh;
use self::triangle_facet::TriangleFacet;
pub use self::validation::check_convex_hull;

mod convex_hull;
mod error;
mod initial_mesh;
mod triangle_facet;
mod validation;
