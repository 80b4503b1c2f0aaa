use super::voronoi_vox::{check_label_range, collect_results};
use super::{PoreVolumeError, PoreVolumes, VoxelParameters};
use crate::network::PoreNetwork;
use crate::segmentation;
use crate::voxelization;

/// Computes the volume of `pores` with a watershed segmentation of the voxel domain.
///
/// The fibre image of the throats around `pores` is generated without its boundary
/// image, then segmented at once by [`watershed_labels`](segmentation::watershed_labels)
/// into one region per non-boundary pore. Volumes and centroids are obtained from the
/// regions as for [`voronoi_vox`](super::voronoi_vox).
pub fn watershed_vox<N: PoreNetwork + ?Sized>(
    network: &N,
    pores: &[usize],
    params: &VoxelParameters,
) -> Result<PoreVolumes, PoreVolumeError> {
    check_label_range(network)?;

    let fibre_params = VoxelParameters {
        add_boundary: false,
        ..*params
    };
    let fibre = voxelization::fibre_image(network, pores, &fibre_params)?;
    let labels = segmentation::watershed_labels(network, &fibre, params);
    let counts = segmentation::count_labels(&labels, &fibre.fibre, network.num_pores());

    Ok(collect_results(network, pores, params, fibre, labels, &counts))
}
