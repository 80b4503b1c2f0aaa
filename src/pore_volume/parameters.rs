use super::PoreVolumeError;
use crate::math::Real;
use crate::voxelization::MemoryBudget;

/// Parameters of the voxel-based pore volume computations.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelParameters {
    /// The edge length of a voxel, in the units of the network coordinates.
    ///
    /// Default: `1.0e-6`.
    pub voxel_length: Real,
    /// The radius of the fibres lying along the throat edges, in the units of the
    /// network coordinates.
    ///
    /// Default: `0.0`.
    pub fibre_radius: Real,
    /// Should the distance-shell boundary image be generated along with the fibre
    /// image? Only used by [`voronoi_vox`](super::voronoi_vox).
    ///
    /// Default: `true`.
    pub add_boundary: bool,
    /// Should the voxel volumes be rescaled so that they sum up to the volume of the
    /// domain spanned by the throat vertices?
    ///
    /// Default: `true`.
    pub conserve_volume: bool,
    /// Should the fibre, boundary and label images be returned with the volumes?
    ///
    /// Default: `false`.
    pub keep_images: bool,
    /// The memory the fibre image generation may use before switching to chunks.
    ///
    /// Default: 1 GiB.
    pub memory_budget: MemoryBudget,
    /// The edge length, in voxels, of the chunks the fibre image is generated with
    /// when the whole image does not fit into the memory budget.
    ///
    /// Default: `100`.
    pub fibre_chunk_len: usize,
    /// The approximate edge length, in voxels, of the chunks the voxels are assigned
    /// to their pores by.
    ///
    /// Default: `200`.
    pub assign_chunk_len: usize,
}

impl Default for VoxelParameters {
    fn default() -> Self {
        Self {
            voxel_length: 1.0e-6,
            fibre_radius: 0.0,
            add_boundary: true,
            conserve_volume: true,
            keep_images: false,
            memory_budget: MemoryBudget::default(),
            fibre_chunk_len: 100,
            assign_chunk_len: 200,
        }
    }
}

impl VoxelParameters {
    /// Default parameters with the given voxel length and fibre radius.
    pub fn new(voxel_length: Real, fibre_radius: Real) -> Self {
        Self {
            voxel_length,
            fibre_radius,
            ..Self::default()
        }
    }

    /// Checks that these parameters can be used for a voxelization.
    pub fn validate(&self) -> Result<(), PoreVolumeError> {
        if !(self.voxel_length > 0.0 && self.voxel_length.is_finite()) {
            return Err(PoreVolumeError::InvalidVoxelLength(self.voxel_length));
        }

        if !(self.fibre_radius >= 0.0 && self.fibre_radius.is_finite()) {
            return Err(PoreVolumeError::InvalidFibreRadius(self.fibre_radius));
        }

        if self.fibre_chunk_len == 0 || self.assign_chunk_len == 0 {
            return Err(PoreVolumeError::InvalidChunkLength);
        }

        Ok(())
    }

    /// The fibre radius, expressed as a whole number of voxels.
    ///
    /// Half a voxel is subtracted since the voxels on the fibre axis already have a
    /// thickness of one voxel. Ties round to even.
    pub fn fibre_radius_voxels(&self) -> usize {
        ((self.fibre_radius - self.voxel_length / 2.0) / self.voxel_length)
            .round_ties_even()
            .max(0.0) as usize
    }

    /// The volume of a single voxel.
    #[inline]
    pub fn voxel_volume(&self) -> Real {
        self.voxel_length * self.voxel_length * self.voxel_length
    }
}
