use crate::math::Real;

/// A bound on the memory a voxelization step may allocate at once.
///
/// The working set of each step is estimated from the number of voxels it processes,
/// so that the strategy (one pass over the whole image, or chunks) can be picked
/// before anything is allocated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MemoryBudget {
    /// The number of bytes available.
    pub bytes: usize,
}

impl Default for MemoryBudget {
    fn default() -> Self {
        Self::new(1 << 30)
    }
}

impl MemoryBudget {
    /// A budget of `bytes` bytes.
    pub fn new(bytes: usize) -> Self {
        Self { bytes }
    }

    /// Bytes needed to build the fibre image of `num_voxels` voxels in a single pass:
    /// the solid mask, the fibre image, the optional boundary image and the distance
    /// field.
    pub fn fibre_working_set(num_voxels: usize, with_boundary: bool) -> usize {
        let boundary = if with_boundary { size_of::<u32>() } else { 0 };
        let per_voxel = size_of::<bool>()
            + size_of::<super::VoxelPhase>()
            + boundary
            + size_of::<Real>();

        num_voxels.saturating_mul(per_voxel)
    }

    /// Bytes needed by the watershed segmentation of `num_voxels` voxels: the seed
    /// mask, the distance field, the label image and the fibre image it is counted
    /// against.
    pub fn watershed_working_set(num_voxels: usize) -> usize {
        let per_voxel = size_of::<bool>()
            + size_of::<Real>()
            + size_of::<u32>()
            + size_of::<super::VoxelPhase>();

        num_voxels.saturating_mul(per_voxel)
    }

    /// Does a working set of `bytes` bytes fit into this budget?
    #[inline]
    pub fn fits(&self, bytes: usize) -> bool {
        bytes <= self.bytes
    }
}
