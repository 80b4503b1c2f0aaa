use super::UNLABELED;
use crate::network::PoreNetwork;
use crate::pore_volume::VoxelParameters;
use crate::voxelization::{euclidean_distance_transform, FibreImages, MemoryBudget, VoxelImage};
use core::cmp::Reverse;
use ordered_float::OrderedFloat;
use std::collections::BinaryHeap;

/// Segments the image of `fibre` into one region per non-boundary pore.
///
/// Each pore marks the voxel containing its center. The regions are grown from these
/// markers by a priority flood over the distance to the nearest marker: voxels are
/// claimed in order of increasing distance, the earliest queued voxel first among
/// equal distances, by the region of the 6-connected neighbor that reached them.
///
/// Pores outside of the image have no region. Every voxel of the image is labelled
/// unless no pore lies inside of it.
pub fn watershed_labels<N: PoreNetwork + ?Sized>(
    network: &N,
    fibre: &FibreImages,
    params: &VoxelParameters,
) -> VoxelImage<u32> {
    let shape = fibre.shape();
    let working_set = MemoryBudget::watershed_working_set(fibre.fibre.len());

    if !params.memory_budget.fits(working_set) {
        log::warn!(
            "The watershed segmentation needs {working_set} bytes, more than the budget of {} bytes",
            params.memory_budget.bytes
        );
    }

    let mut labels = VoxelImage::new(shape, UNLABELED);
    let mut markers = Vec::new();

    for pore in network.non_boundary_pores() {
        let Some(idx) = fibre.voxel_index(&network.pore_coords(pore)) else {
            log::warn!("Pore {pore} lies outside of the voxel image and gets no volume");
            continue;
        };

        if labels[idx] != UNLABELED {
            log::debug!(
                "Pore {pore} shares its voxel with pore {}, and gets no volume",
                labels[idx]
            );
            continue;
        }

        labels[idx] = pore as u32;
        markers.push(labels.linear_index(idx));
    }

    let dist = euclidean_distance_transform(shape, |idx| labels[idx] != UNLABELED);
    let mut queue = BinaryHeap::with_capacity(markers.len());
    let mut age = 0u64;

    for marker in markers {
        queue.push(Reverse((OrderedFloat(dist.data()[marker]), age, marker)));
        age += 1;
    }

    while let Some(Reverse((_, _, curr))) = queue.pop() {
        let label = labels.data()[curr];
        let [i, j, k] = labels.voxel_index(curr);

        for (axis, c) in [i, j, k].into_iter().enumerate() {
            let mut neighbors = [None, None];

            if c > 0 {
                neighbors[0] = Some(c - 1);
            }
            if c + 1 < shape[axis] {
                neighbors[1] = Some(c + 1);
            }

            for nc in neighbors.into_iter().flatten() {
                let mut idx = [i, j, k];
                idx[axis] = nc;
                let nb = labels.linear_index(idx);

                if labels.data()[nb] == UNLABELED {
                    labels.data_mut()[nb] = label;
                    queue.push(Reverse((OrderedFloat(dist.data()[nb]), age, nb)));
                    age += 1;
                }
            }
        }
    }

    labels
}
