use super::{ChunkVolumes, UNLABELED};
use crate::math::{Point, Real};
use crate::network::PoreNetwork;
use crate::voxelization::{ChunkRange, FibreImages, VoxelImage, VoxelPhase};
use rstar::primitives::GeomWithData;
use rstar::{RTree, AABB};

type PoreEntry = GeomWithData<[Real; 3], usize>;

/// Tolerance, in voxels, added to the search radius of the completion pass.
const COMPLETION_TOLERANCE: Real = 1.0e-9;

/// Spatial index of the pores of a network, in the voxel coordinates of an image.
pub struct PoreLocator {
    all: RTree<PoreEntry>,
    eligible: RTree<PoreEntry>,
}

impl PoreLocator {
    /// Indexes all the pores of `network`, expressed in the voxel coordinates of
    /// `images`.
    ///
    /// Only non-boundary pores can own voxels.
    pub fn new<N: PoreNetwork + ?Sized>(network: &N, images: &FibreImages) -> Self {
        let entries: Vec<_> = (0..network.num_pores())
            .map(|p| {
                let pt = images.voxel_coords(&network.pore_coords(p));
                PoreEntry::new([pt.x, pt.y, pt.z], p)
            })
            .collect();
        let eligible = entries
            .iter()
            .filter(|e| !network.is_boundary_pore(e.data))
            .cloned()
            .collect();

        Self {
            all: RTree::bulk_load(entries),
            eligible: RTree::bulk_load(eligible),
        }
    }

    /// The number of pores able to own voxels.
    pub fn num_eligible(&self) -> usize {
        self.eligible.size()
    }

    /// The pores, boundary pores included, located in the region of `chunk`.
    ///
    /// The region of a voxel extends half a voxel on each side of its index; the
    /// region of the chunk is closed at its minimum corner and open at its maximum
    /// corner, so that each pore belongs to at most one chunk.
    pub fn pores_in_chunk(&self, chunk: &ChunkRange) -> Vec<usize> {
        let mins = chunk.start().map(|s| s as Real - 0.5);
        let maxs = chunk.end().map(|e| e as Real - 0.5);
        let mut pores: Vec<usize> = self
            .all
            .locate_in_envelope(&AABB::from_corners(mins, maxs))
            .filter(|e| (0..3).all(|i| e.geom()[i] >= mins[i] && e.geom()[i] < maxs[i]))
            .map(|e| e.data)
            .collect();
        pores.sort_unstable();
        pores
    }

    /// The non-boundary pore nearest to `pt`, the lowest id winning ties.
    pub fn nearest_eligible(&self, pt: &[Real; 3]) -> Option<usize> {
        nearest(&self.eligible, pt).map(|(pore, _)| pore)
    }

    /// The non-boundary pores at a distance smaller or equal to `dist` from the box
    /// spanned by the centers of the voxels of `chunk`.
    ///
    /// The result may contain a few pores further away.
    pub fn eligible_near_chunk(&self, chunk: &ChunkRange, dist: Real) -> Vec<usize> {
        let r = dist + COMPLETION_TOLERANCE;
        let mins = chunk.start().map(|s| s as Real - r);
        let maxs = chunk.end().map(|e| e as Real - 1.0 + r);

        self.eligible
            .locate_in_envelope(&AABB::from_corners(mins, maxs))
            .map(|e| e.data)
            .collect()
    }
}

fn nearest(tree: &RTree<PoreEntry>, pt: &[Real; 3]) -> Option<(usize, Real)> {
    let mut neighbors = tree.nearest_neighbor_iter_with_distance_2(pt);
    let (first, best_dist) = neighbors.next()?;
    let mut best = first.data;

    for (entry, dist) in neighbors {
        if dist > best_dist {
            break;
        }

        best = best.min(entry.data);
    }

    Some((best, best_dist))
}

/// Assigns every voxel of `chunk` to its nearest non-boundary pore.
///
/// The candidate pores are the pores located in the chunk and their neighbors. When
/// none of them can own voxels, the pore nearest to the chunk center is used instead.
/// The assignment is then completed with any other pore that could be nearer to one
/// of the voxels than its current owner, so the result does not depend on the way
/// the image is split into chunks.
///
/// The labels are written to `labels` at the position of the chunk, and the pore and
/// fibre voxels owned by each candidate are counted. If the network has no
/// non-boundary pore, nothing is labelled and the result is empty.
pub fn assign_chunk_volumes<N: PoreNetwork + ?Sized>(
    network: &N,
    locator: &PoreLocator,
    chunk: &ChunkRange,
    fibre: &FibreImages,
    labels: &mut VoxelImage<u32>,
) -> ChunkVolumes {
    let (chunk_labels, volumes) = label_chunk(network, locator, chunk, fibre);

    if let Some(chunk_labels) = chunk_labels {
        labels.write_sub_image(chunk, &chunk_labels);
    }

    volumes
}

/// Labels the voxels of `chunk` into a buffer of the shape of the chunk.
///
/// Returns `None` instead of the buffer if the network has no pore able to own voxels.
pub(crate) fn label_chunk<N: PoreNetwork + ?Sized>(
    network: &N,
    locator: &PoreLocator,
    chunk: &ChunkRange,
    fibre: &FibreImages,
) -> (Option<VoxelImage<u32>>, ChunkVolumes) {
    if locator.num_eligible() == 0 || chunk.is_empty() {
        return (None, ChunkVolumes::default());
    }

    let in_chunk = locator.pores_in_chunk(chunk);
    let mut candidates = network.neighbor_pores(&in_chunk);
    candidates.extend_from_slice(&in_chunk);
    candidates.retain(|p| !network.is_boundary_pore(*p));
    candidates.sort_unstable();
    candidates.dedup();

    if candidates.is_empty() {
        let center = [0, 1, 2].map(|i| {
            let r = &chunk.ranges[i];
            (r.start + r.end - 1) as Real / 2.0
        });
        candidates.extend(locator.nearest_eligible(&center));
    }

    let mut labels = VoxelImage::new(chunk.shape(), UNLABELED);
    let mut max_dist = label_nearest(network, fibre, chunk, &candidates, &mut labels);

    let extra: Vec<usize> = locator
        .eligible_near_chunk(chunk, max_dist.sqrt())
        .into_iter()
        .filter(|p| candidates.binary_search(p).is_err())
        .collect();

    if !extra.is_empty() {
        log::debug!(
            "Completing chunk {:?} with {} pores closer than {}",
            chunk.ranges,
            extra.len(),
            max_dist.sqrt()
        );
        candidates.extend(extra);
        candidates.sort_unstable();
        max_dist = label_nearest(network, fibre, chunk, &candidates, &mut labels);
    }

    log::trace!(
        "Chunk {:?}: {} voxels, {} candidate pores, farthest voxel at {}",
        chunk.ranges,
        chunk.len(),
        candidates.len(),
        max_dist.sqrt()
    );

    let mut volumes = ChunkVolumes::zeros(candidates);

    for idx in chunk.iter() {
        let label = labels[chunk.local_index(idx)] as usize;
        let Ok(pos) = volumes.pores.binary_search(&label) else {
            continue;
        };

        match fibre.fibre[idx] {
            VoxelPhase::Pore => volumes.pore_voxels[pos] += 1,
            VoxelPhase::Fibre => volumes.fibre_voxels[pos] += 1,
        }
    }

    (Some(labels), volumes)
}

/// Labels each voxel of `chunk` with the nearest of `candidates`.
///
/// Returns the largest squared distance between a voxel and its label.
fn label_nearest<N: PoreNetwork + ?Sized>(
    network: &N,
    fibre: &FibreImages,
    chunk: &ChunkRange,
    candidates: &[usize],
    labels: &mut VoxelImage<u32>,
) -> Real {
    let entries = candidates
        .iter()
        .map(|p| {
            let pt: Point<Real> = fibre.voxel_coords(&network.pore_coords(*p));
            PoreEntry::new([pt.x, pt.y, pt.z], *p)
        })
        .collect();
    let tree = RTree::bulk_load(entries);
    let mut max_dist: Real = 0.0;

    for idx in chunk.iter() {
        let query = idx.map(|c| c as Real);

        if let Some((pore, dist)) = nearest(&tree, &query) {
            labels[chunk.local_index(idx)] = pore as u32;
            max_dist = max_dist.max(dist);
        }
    }

    max_dist
}

#[cfg(test)]
mod test {
    use super::{assign_chunk_volumes, PoreLocator};
    use crate::math::Point;
    use crate::network::Network;
    use crate::segmentation::UNLABELED;
    use crate::voxelization::{ChunkGrid, ChunkRange, FibreImages, VoxelImage, VoxelPhase};

    fn images(shape: [usize; 3]) -> FibreImages {
        FibreImages {
            fibre: VoxelImage::new(shape, VoxelPhase::Pore),
            boundary: None,
            origin: Point::origin(),
            voxel_length: 1.0,
            fibre_radius_voxels: 0,
        }
    }

    /// A row of pores along `x`, none of them connected.
    fn row(xs: &[f64], boundary: Vec<bool>) -> Network {
        let coords = xs.iter().map(|x| Point::new(*x, 0.0, 0.0)).collect();
        Network::new(coords, boundary, vec![], vec![]).unwrap()
    }

    #[test]
    fn nearest_with_ties() {
        // The voxel x = 2 is as close to pore 0 as to pore 1.
        let net = row(&[0.0, 4.0, 9.0], vec![false, false, true]);
        let fibre = images([5, 1, 1]);
        let locator = PoreLocator::new(&net, &fibre);
        let mut labels = VoxelImage::new([5, 1, 1], UNLABELED);

        let chunk = ChunkRange::full([5, 1, 1]);

        let volumes = assign_chunk_volumes(&net, &locator, &chunk, &fibre, &mut labels);
        assert_eq!(labels.data(), &[0, 0, 0, 1, 1]);
        assert_eq!(volumes.pores, vec![0, 1]);
        assert_eq!(volumes.pore_voxels, vec![3, 2]);
        assert_eq!(volumes.num_voxels(), 5);
    }

    #[test]
    fn chunks_without_pores_are_completed() {
        let net = row(&[0.0, 10.0], vec![false, false]);
        let fibre = images([12, 1, 1]);
        let locator = PoreLocator::new(&net, &fibre);
        let mut labels = VoxelImage::new([12, 1, 1], UNLABELED);

        for chunk in ChunkGrid::split([12, 1, 1], 3).chunks() {
            let volumes = assign_chunk_volumes(&net, &locator, chunk, &fibre, &mut labels);
            assert_eq!(volumes.num_voxels(), chunk.len() as u64);
        }

        assert_eq!(labels.data(), &[0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn only_boundary_pores() {
        let net = row(&[0.0, 1.0], vec![true, true]);
        let fibre = images([3, 1, 1]);
        let locator = PoreLocator::new(&net, &fibre);
        let mut labels = VoxelImage::new([3, 1, 1], UNLABELED);

        let chunk = ChunkRange::full([3, 1, 1]);

        let volumes = assign_chunk_volumes(&net, &locator, &chunk, &fibre, &mut labels);
        assert!(volumes.pores.is_empty());
        assert!(labels.data().iter().all(|l| *l == UNLABELED));
    }
}
