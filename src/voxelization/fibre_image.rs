use super::{
    euclidean_distance_transform, ChunkGrid, ChunkRange, MemoryBudget, VoxelImage, VoxelPhase,
};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::network::PoreNetwork;
use crate::pore_volume::{PoreVolumeError, VoxelParameters};
use crate::transformation::rasterize_faces;
use ordered_float::OrderedFloat;

/// Tolerance, in voxels, under which an extent is considered to be a whole number of
/// voxels.
const SHAPE_TOLERANCE: Real = 1.0e-6;

/// The voxel images of the fibres of a network.
#[derive(Clone, Debug)]
pub struct FibreImages {
    /// The material of each voxel.
    pub fibre: VoxelImage<VoxelPhase>,
    /// The distance shell of each voxel, if requested.
    ///
    /// Fibre voxels have the id `0`. Pore voxels are numbered from `1`, by increasing
    /// distance to the nearest fibre axis; the rank is local to the chunk the image
    /// was generated with.
    pub boundary: Option<VoxelImage<u32>>,
    /// The world position of the voxel `[0, 0, 0]`.
    pub origin: Point<Real>,
    /// The edge length of a voxel.
    pub voxel_length: Real,
    /// The fibre radius, in voxels.
    pub fibre_radius_voxels: usize,
}

impl FibreImages {
    /// The shape of the images.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        self.fibre.shape()
    }

    /// The world position of the center of the voxel `idx`.
    pub fn world_position(&self, idx: [usize; 3]) -> Point<Real> {
        let idx = Vector::new(idx[0] as Real, idx[1] as Real, idx[2] as Real);
        self.origin + idx * self.voxel_length
    }

    /// The continuous voxel coordinates of the world-space point `pt`.
    pub fn voxel_coords(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from((pt - self.origin) / self.voxel_length)
    }

    /// The index of the voxel containing the world-space point `pt`, or `None` if it
    /// lies outside of the image.
    pub fn voxel_index(&self, pt: &Point<Real>) -> Option<[usize; 3]> {
        let coords = self.voxel_coords(pt);
        let shape = self.shape();
        let mut idx = [0; 3];

        for i in 0..3 {
            let c = coords[i].round();

            if !(c >= 0.0 && c < shape[i] as Real) {
                return None;
            }

            idx[i] = c as usize;
        }

        Some(idx)
    }
}

/// Builds the fibre image of the region of `network` around `pores`.
///
/// The throats adjacent to `pores` are rasterized along their edges, marking the
/// voxels of the fibre axes as solid. The fibres are then inflated to their radius
/// with a Euclidean distance transform: every voxel closer to an axis than
/// `params.fibre_radius` is a fibre voxel, the others are pore voxels.
///
/// The image spans the bounding box of the vertices of these throats, its minimum
/// corner being the voxel `[0, 0, 0]`. If the working set does not fit into
/// `params.memory_budget`, the distance transform is done chunk by chunk, each chunk
/// being enlarged by five fibre radii to account for the fibres crossing its
/// boundary.
pub fn fibre_image<N>(
    network: &N,
    pores: &[usize],
    params: &VoxelParameters,
) -> Result<FibreImages, PoreVolumeError>
where
    N: PoreNetwork + ?Sized,
{
    params.validate()?;

    let num_pores = network.num_pores();
    if let Some(pore) = pores.iter().copied().find(|p| *p >= num_pores) {
        return Err(PoreVolumeError::PoreOutOfRange { pore, num_pores });
    }

    let throats = network.neighbor_throats(pores);
    if throats.is_empty() {
        return Err(PoreVolumeError::NoThroats);
    }

    let faces: Vec<&[Point<Real>]> = throats
        .iter()
        .map(|t| network.throat_vertices(*t))
        .collect();
    let aabb = Aabb::from_point_groups(&faces).ok_or(PoreVolumeError::EmptyImage)?;
    let shape = image_shape(&aabb.extents(), params.voxel_length)?;
    let num_voxels = shape[0] * shape[1] * shape[2];

    log::info!(
        "Creating fibre domain of extents {:?}: {:?} voxels",
        aabb.extents().as_slice(),
        shape
    );

    let working_set = MemoryBudget::fibre_working_set(num_voxels, params.add_boundary);
    let grid = if params.memory_budget.fits(working_set) {
        ChunkGrid::single(shape)
    } else {
        log::info!(
            "Fibre domain needs {working_set} bytes, more than the budget of {}: processing it by chunks of {} voxels",
            params.memory_budget.bytes,
            params.fibre_chunk_len
        );
        ChunkGrid::tile(shape, params.fibre_chunk_len)
    };

    // Rasterize the fibre axes, relative to the image origin.
    let origin = aabb.mins;
    let translated: Vec<Vec<Point<Real>>> = faces
        .iter()
        .map(|face| face.iter().map(|pt| Point::from(pt - origin)).collect())
        .collect();
    let mut solid = VoxelImage::new(shape, false);

    for sample in rasterize_faces(&translated, params.voxel_length) {
        let mut idx = [0; 3];
        for i in 0..3 {
            let c = (sample[i] / params.voxel_length).round().max(0.0) as usize;
            idx[i] = c.min(shape[i] - 1);
        }
        solid[idx] = true;
    }

    let radius = params.fibre_radius_voxels();
    let margin = (5 * radius).max(1);
    let mut fibre = VoxelImage::new(shape, VoxelPhase::Pore);
    let mut boundary = params.add_boundary.then(|| VoxelImage::new(shape, 0u32));

    for (n, chunk) in grid.chunks().iter().enumerate() {
        if grid.len() > 1 {
            log::info!("Processing fibre chunk {} of {}", n + 1, grid.len());
        }

        let region = chunk.dilated(margin, shape);
        classify_chunk(&solid, chunk, &region, radius, &mut fibre, boundary.as_mut());
    }

    drop(solid);

    Ok(FibreImages {
        fibre,
        boundary,
        origin,
        voxel_length: params.voxel_length,
        fibre_radius_voxels: radius,
    })
}

/// The shape of an image spanning `extents` with voxels of edge `voxel_length`.
///
/// There is one more voxel than the number of voxel lengths fitting into the extent,
/// the voxels being centered on the grid nodes.
pub(crate) fn image_shape(
    extents: &Vector<Real>,
    voxel_length: Real,
) -> Result<[usize; 3], PoreVolumeError> {
    let mut shape = [0; 3];

    for i in 0..3 {
        let n = extents[i] / voxel_length;

        if !(n.is_finite() && n >= 0.0) {
            return Err(PoreVolumeError::EmptyImage);
        }

        let rounded = n.round();
        let whole = if relative_eq!(n, rounded, epsilon = SHAPE_TOLERANCE) {
            rounded
        } else {
            n.ceil()
        };

        // Saturated axes are reported as `usize::MAX`.
        shape[i] = if whole >= (usize::MAX / 2) as Real {
            usize::MAX
        } else {
            whole as usize + 1
        };
    }

    if shape.iter().any(|d| *d == 0) {
        return Err(PoreVolumeError::EmptyImage);
    }

    let num_voxels = shape[0]
        .checked_mul(shape[1])
        .and_then(|n| n.checked_mul(shape[2]));

    if num_voxels.is_none() {
        return Err(PoreVolumeError::ImageTooLarge(shape));
    }

    Ok(shape)
}

/// Computes the fibre and boundary voxels of `chunk`, using the distance transform of
/// the enclosing `region`.
fn classify_chunk(
    solid: &VoxelImage<bool>,
    chunk: &ChunkRange,
    region: &ChunkRange,
    radius: usize,
    fibre: &mut VoxelImage<VoxelPhase>,
    boundary: Option<&mut VoxelImage<u32>>,
) {
    let start = region.start();
    let dist = euclidean_distance_transform(region.shape(), |idx| {
        solid[[idx[0] + start[0], idx[1] + start[1], idx[2] + start[2]]]
    });
    let radius = radius as Real;

    for idx in chunk.iter() {
        let d = dist[region.local_index(idx)];
        fibre[idx] = if d <= radius {
            VoxelPhase::Fibre
        } else {
            VoxelPhase::Pore
        };
    }

    if let Some(boundary) = boundary {
        // Distinct distances of the region's pore voxels, in increasing order.
        let mut shells: Vec<OrderedFloat<Real>> = dist
            .data()
            .iter()
            .filter(|d| **d > radius)
            .map(|d| OrderedFloat(*d))
            .collect();
        shells.sort_unstable();
        shells.dedup();

        for idx in chunk.iter() {
            let d = dist[region.local_index(idx)];
            boundary[idx] = if d > radius {
                let rank = shells.binary_search(&OrderedFloat(d)).unwrap_or(0);
                u32::try_from(rank + 1).unwrap_or(u32::MAX)
            } else {
                0
            };
        }
    }
}
