//! Pore volumes, centroids and fibre content of a pore network.
//!
//! Three methods are available:
//! * [`voronoi_hull`] computes the volume of the convex hull of the throats around
//!   each pore;
//! * [`voronoi_vox`] voxelizes the fibres and assigns each voxel to its nearest pore;
//! * [`watershed_vox`] voxelizes the fibres and grows one region per pore with a
//!   watershed segmentation.

pub use self::error::PoreVolumeError;
pub use self::parameters::VoxelParameters;
pub use self::result::{PoreVolumes, VolumeImages};
pub use self::voronoi_hull::voronoi_hull;
pub use self::voronoi_vox::voronoi_vox;
pub use self::watershed_vox::watershed_vox;

mod correction;
mod error;
mod parameters;
mod result;
mod voronoi_hull;
mod voronoi_vox;
mod watershed_vox;
