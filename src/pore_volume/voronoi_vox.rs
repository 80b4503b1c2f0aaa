use super::correction::{conservation_factor, sanitize_volume};
use super::{PoreVolumeError, PoreVolumes, VolumeImages, VoxelParameters};
use crate::math::Real;
use crate::network::PoreNetwork;
use crate::segmentation::{self, LabelCounts, PoreLocator, UNLABELED};
use crate::voxelization::{self, ChunkGrid, FibreImages, VoxelImage};

/// Computes the volume of `pores` by assigning each voxel of the domain to its nearest
/// non-boundary pore.
///
/// The fibre image of the throats around `pores` is generated first, then split into
/// chunks of about `params.assign_chunk_len` voxels along each axis that are labelled
/// one after the other (or in parallel with the `parallel` feature). The open volume of
/// a pore is the number of pore voxels it owns times the volume of a voxel, corrected
/// to match the domain volume if `params.conserve_volume` is set.
///
/// The centroid of a pore is the center of all the voxels it owns, or its own position
/// if it owns none.
pub fn voronoi_vox<N: PoreNetwork + ?Sized>(
    network: &N,
    pores: &[usize],
    params: &VoxelParameters,
) -> Result<PoreVolumes, PoreVolumeError> {
    check_label_range(network)?;

    let fibre = voxelization::fibre_image(network, pores, params)?;
    let locator = PoreLocator::new(network, &fibre);
    let grid = ChunkGrid::split(fibre.shape(), params.assign_chunk_len);
    let mut labels = VoxelImage::new(fibre.shape(), UNLABELED);

    log::info!(
        "Assigning {} voxels to {} pores, in {} chunks",
        fibre.fibre.len(),
        locator.num_eligible(),
        grid.len()
    );

    let counts = assign_chunks(network, &locator, &grid, &fibre, &mut labels);

    Ok(collect_results(network, pores, params, fibre, labels, &counts))
}

#[cfg(not(feature = "parallel"))]
fn assign_chunks<N: PoreNetwork + ?Sized>(
    network: &N,
    locator: &PoreLocator,
    grid: &ChunkGrid,
    fibre: &FibreImages,
    labels: &mut VoxelImage<u32>,
) -> LabelCounts {
    let mut counts = LabelCounts::new(network.num_pores());

    for (n, chunk) in grid.chunks().iter().enumerate() {
        log::info!("Processing chunk {} of {}", n + 1, grid.len());
        let volumes = segmentation::assign_chunk_volumes(network, locator, chunk, fibre, labels);
        counts.add_chunk(&volumes);
    }

    counts
}

#[cfg(feature = "parallel")]
fn assign_chunks<N: PoreNetwork + ?Sized>(
    network: &N,
    locator: &PoreLocator,
    grid: &ChunkGrid,
    fibre: &FibreImages,
    labels: &mut VoxelImage<u32>,
) -> LabelCounts {
    use rayon::prelude::*;

    let labelled: Vec<_> = grid
        .chunks()
        .par_iter()
        .map(|chunk| segmentation::label_chunk(network, locator, chunk, fibre))
        .collect();

    let mut counts = LabelCounts::new(network.num_pores());

    for (chunk, (chunk_labels, volumes)) in grid.chunks().iter().zip(labelled) {
        if let Some(chunk_labels) = chunk_labels {
            labels.write_sub_image(chunk, &chunk_labels);
        }
        counts.add_chunk(&volumes);
    }

    counts
}

/// Checks that every pore id can be stored in a label image.
pub(super) fn check_label_range<N: PoreNetwork + ?Sized>(
    network: &N,
) -> Result<(), PoreVolumeError> {
    if network.num_pores() >= UNLABELED as usize {
        Err(PoreVolumeError::TooManyPores(network.num_pores()))
    } else {
        Ok(())
    }
}

/// Turns the voxel counts of the network pores into the results of `pores`.
pub(super) fn collect_results<N: PoreNetwork + ?Sized>(
    network: &N,
    pores: &[usize],
    params: &VoxelParameters,
    fibre: FibreImages,
    labels: VoxelImage<u32>,
    counts: &LabelCounts,
) -> PoreVolumes {
    let voxel_volume = params.voxel_volume();
    let correction = if params.conserve_volume {
        conservation_factor(network.vertex_domain_volume(), fibre.fibre.len(), voxel_volume)
    } else {
        1.0
    };

    let centroids = segmentation::voxel_centroids(
        &labels,
        &fibre.origin,
        fibre.voxel_length,
        network.num_pores(),
    );

    let mut results = PoreVolumes::zeros(pores.to_vec(), Vec::with_capacity(pores.len()));
    results.correction = correction;

    for (i, pore) in pores.iter().copied().enumerate() {
        let pore_voxels = counts.pore_voxels[pore];
        let fibre_voxels = counts.fibre_voxels[pore];

        results.pore_voxels[i] = pore_voxels;
        results.fibre_voxels[i] = fibre_voxels;
        results.volumes[i] = sanitize_volume(pore_voxels as Real * voxel_volume * correction);
        results.fibre_volumes[i] =
            sanitize_volume(fibre_voxels as Real * voxel_volume * correction);
        results
            .centroids
            .push(centroids[pore].unwrap_or_else(|| network.pore_coords(pore)));
    }

    log::info!(
        "Total pore volume: {}, volume correction: {correction}",
        results.total_volume()
    );

    if params.keep_images {
        results.images = Some(VolumeImages {
            fibre: fibre.fibre,
            boundary: fibre.boundary,
            labels,
            origin: fibre.origin,
            voxel_length: fibre.voxel_length,
        });
    }

    results
}
