use crate::math::Real;

/// Errors preventing the computation of pore volumes.
///
/// They are all detected before any voxel is processed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PoreVolumeError {
    /// The voxel length is not a finite positive number.
    #[error("The voxel length must be finite and positive, got {0}.")]
    InvalidVoxelLength(Real),
    /// The fibre radius is negative or not finite.
    #[error("The fibre radius must be finite and non-negative, got {0}.")]
    InvalidFibreRadius(Real),
    /// A chunk length is zero.
    #[error("Chunk lengths must be at least one voxel.")]
    InvalidChunkLength,
    /// A requested pore does not exist in the network.
    #[error("Pore {pore} is out of range: the network has {num_pores} pores.")]
    PoreOutOfRange {
        /// The requested pore.
        pore: usize,
        /// The number of pores of the network.
        num_pores: usize,
    },
    /// The network has more pores than a label image can index.
    #[error("The network has {0} pores, more than a label image can index.")]
    TooManyPores(usize),
    /// None of the requested pores has a throat, so there is nothing to voxelize.
    #[error("The requested pores have no throat.")]
    NoThroats,
    /// The throats of the requested pores have no vertex.
    #[error("The throat vertices span an empty domain.")]
    EmptyImage,
    /// The voxel image would have more voxels than can be addressed.
    #[error("A voxel image of shape {0:?} cannot be allocated.")]
    ImageTooLarge([usize; 3]),
}
