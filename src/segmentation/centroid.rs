use super::UNLABELED;
use crate::math::{Point, Real, Vector};
use crate::voxelization::VoxelImage;

/// Computes the centroid of the voxels of each label of `labels`.
///
/// The centroid of the label `p` is the mean index of its voxels, scaled by
/// `voxel_length` and translated by `origin`. Labels without any voxel, and labels
/// greater or equal to `num_pores`, get `None`.
pub fn voxel_centroids(
    labels: &VoxelImage<u32>,
    origin: &Point<Real>,
    voxel_length: Real,
    num_pores: usize,
) -> Vec<Option<Point<Real>>> {
    let mut sums = vec![Vector::<Real>::zeros(); num_pores];
    let mut counts = vec![0u64; num_pores];

    for (idx, label) in labels.indexed_iter() {
        if label == UNLABELED || label as usize >= num_pores {
            continue;
        }

        sums[label as usize] += Vector::new(idx[0] as Real, idx[1] as Real, idx[2] as Real);
        counts[label as usize] += 1;
    }

    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| {
            (count > 0).then(|| origin + sum * (voxel_length / count as Real))
        })
        .collect()
}
