use super::correction::sanitize_volume;
use super::{PoreVolumeError, PoreVolumes};
use crate::mass_properties::hull_volume_and_centroid;
use crate::math::{Point, Real};
use crate::network::PoreNetwork;
use crate::utils;

/// Computes the volume and centroid of `pores` from the convex hull of their throats.
///
/// The hull of a pore is built from the offset vertices of its throats, or from their
/// vertices if the network has no offset vertices. Pores with a single throat, or
/// whose throats have too few vertices to enclose a volume, get a zero volume and are
/// centered on the vertices of their throats (or on the pore itself when there are
/// none).
///
/// No voxel is involved: voxel counts and fibre volumes are zero.
pub fn voronoi_hull<N: PoreNetwork + ?Sized>(
    network: &N,
    pores: &[usize],
) -> Result<PoreVolumes, PoreVolumeError> {
    let num_pores = network.num_pores();
    if let Some(pore) = pores.iter().copied().find(|p| *p >= num_pores) {
        return Err(PoreVolumeError::PoreOutOfRange { pore, num_pores });
    }

    let mut results = PoreVolumes::zeros(pores.to_vec(), Vec::with_capacity(pores.len()));

    for (i, pore) in pores.iter().copied().enumerate() {
        let throats = network.pore_throats(pore);
        let mut points: Vec<Point<Real>> = Vec::new();

        for throat in throats {
            let vertices = network
                .throat_offset_vertices(*throat)
                .unwrap_or_else(|| network.throat_vertices(*throat));
            points.extend_from_slice(vertices);
        }

        let centroid = if throats.len() > 1 && points.len() > 4 {
            let props = hull_volume_and_centroid(&points);
            results.volumes[i] = sanitize_volume(props.volume);
            props.centroid
        } else {
            if throats.len() == 1 {
                // The throat vertices, not the offset ones, locate a dead-end pore.
                points = network.throat_vertices(throats[0]).to_vec();
            }

            utils::center(&points).unwrap_or_else(|| network.pore_coords(pore))
        };

        results.centroids.push(centroid);
    }

    Ok(results)
}
