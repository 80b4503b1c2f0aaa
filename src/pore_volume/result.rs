use crate::math::{Point, Real};
use crate::voxelization::{VoxelImage, VoxelPhase};

/// The volumes of a set of pores.
///
/// All the arrays are aligned with `pores`: the `i`-th entry of each of them is about
/// the pore `pores[i]` of the network.
#[derive(Clone, Debug, PartialEq)]
pub struct PoreVolumes {
    /// The network ids of the pores.
    pub pores: Vec<usize>,
    /// The open volume of each pore.
    pub volumes: Vec<Real>,
    /// The volume of fibre enclosed by each pore.
    pub fibre_volumes: Vec<Real>,
    /// The center of mass of each pore, fibres included.
    pub centroids: Vec<Point<Real>>,
    /// The number of open voxels of each pore.
    pub pore_voxels: Vec<u64>,
    /// The number of fibre voxels of each pore.
    pub fibre_voxels: Vec<u64>,
    /// The factor the voxel volumes were multiplied by to match the domain volume.
    pub correction: Real,
    /// The voxel images, if they were requested.
    pub images: Option<VolumeImages>,
}

/// The voxel images a volume computation is based on.
#[derive(Clone, Debug, PartialEq)]
pub struct VolumeImages {
    /// The material of each voxel.
    pub fibre: VoxelImage<VoxelPhase>,
    /// The distance shells of the pore voxels.
    pub boundary: Option<VoxelImage<u32>>,
    /// The pore owning each voxel, or [`UNLABELED`](crate::segmentation::UNLABELED).
    pub labels: VoxelImage<u32>,
    /// The world position of the voxel `[0, 0, 0]`.
    pub origin: Point<Real>,
    /// The edge length of a voxel.
    pub voxel_length: Real,
}

impl PoreVolumes {
    /// Results for `pores` with zero volumes and voxel counts.
    pub(crate) fn zeros(pores: Vec<usize>, centroids: Vec<Point<Real>>) -> Self {
        let n = pores.len();
        Self {
            pores,
            volumes: vec![0.0; n],
            fibre_volumes: vec![0.0; n],
            centroids,
            pore_voxels: vec![0; n],
            fibre_voxels: vec![0; n],
            correction: 1.0,
            images: None,
        }
    }

    /// The number of pores.
    pub fn len(&self) -> usize {
        self.pores.len()
    }

    /// Are there no pores?
    pub fn is_empty(&self) -> bool {
        self.pores.is_empty()
    }

    /// The position of the network pore `pore` in these results.
    pub fn position(&self, pore: usize) -> Option<usize> {
        self.pores.iter().position(|p| *p == pore)
    }

    /// The sum of the open volumes.
    pub fn total_volume(&self) -> Real {
        self.volumes.iter().sum()
    }

    /// The sum of the open and fibre volumes.
    pub fn total_bulk_volume(&self) -> Real {
        self.total_volume() + self.fibre_volumes.iter().sum::<Real>()
    }
}
