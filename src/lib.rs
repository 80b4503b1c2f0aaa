/*!
porevox
========

**porevox** computes the volume, centroid and fibre content of the pores of a
3-dimensional pore-network model.

Two families of methods are provided:

* an analytic one, [`pore_volume::voronoi_hull`], which takes the convex hull of
  the offset vertices surrounding each pore and decomposes it into pyramids;
* voxel-based ones, [`pore_volume::voronoi_vox`] and [`pore_volume::watershed_vox`],
  which rasterize the throat edges into a fibre image and partition the voxels
  between pores, keeping memory bounded by processing the image chunk by chunk.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod mass_properties;
pub mod network;
pub mod pore_volume;
pub mod segmentation;
pub mod transformation;
pub mod utils;
pub mod voxelization;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point3, Vector3};

    /// The scalar type used throughout this crate.
    ///
    /// Pore networks are usually expressed in meters with micron-sized features,
    /// so double precision is required.
    pub type Real = f64;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
