//! Convex hulls and rasterization of throat faces.

pub use self::convex_hull2::convex_hull2_idx;
pub use self::convex_hull3::{check_convex_hull, try_convex_hull, ConvexHullError};
pub use self::rasterize::{order_face, rasterize_faces};

mod convex_hull2;
mod convex_hull3;
pub(crate) mod convex_hull_utils;
mod rasterize;
