//! Partition of a voxel image between the pores of a network.

pub use self::centroid::voxel_centroids;
pub use self::counts::{count_labels, ChunkVolumes, LabelCounts};
pub use self::nearest::{assign_chunk_volumes, PoreLocator};
pub use self::watershed::watershed_labels;

#[cfg(feature = "parallel")]
pub(crate) use self::nearest::label_chunk;

/// The label of the voxels that do not belong to any pore.
pub const UNLABELED: u32 = u32::MAX;

mod centroid;
mod counts;
mod nearest;
mod watershed;
