//! Voxel images of the pore space and of the fibres.

pub use self::chunk::{ChunkGrid, ChunkRange};
pub use self::distance_transform::euclidean_distance_transform;
pub use self::fibre_image::{fibre_image, FibreImages};
pub use self::memory::MemoryBudget;
pub use self::voxel_image::{VoxelImage, VoxelPhase};

mod chunk;
mod distance_transform;
mod fibre_image;
mod memory;
mod voxel_image;
