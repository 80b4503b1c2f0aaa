use super::lattice;
use na::Vector3;
use porevox::network::{Network, PoreNetwork};
use porevox::pore_volume::{voronoi_vox, VoxelParameters};

/// Copies `net` with every pore and throat vertex moved by `shift`.
fn translated(net: &Network, shift: Vector3<f64>) -> Network {
    let coords = (0..net.num_pores()).map(|p| net.pore_coords(p) + shift).collect();
    let boundary = (0..net.num_pores()).map(|p| net.is_boundary_pore(p)).collect();
    let conns = (0..net.num_throats()).map(|t| net.throat_conns(t)).collect();
    let vertices = (0..net.num_throats())
        .map(|t| net.throat_vertices(t).iter().map(|v| v + shift).collect())
        .collect();

    Network::new(coords, boundary, conns, vertices).unwrap()
}

#[test]
fn voxel_centroids_are_cube_centers() {
    let cells = [2, 2, 2];
    let pores = lattice::cube_pores(cells);
    let params = VoxelParameters::new(0.1, 0.0);

    for shift in [Vector3::zeros(), Vector3::new(10.25, -3.0, 0.5)] {
        let net = translated(&lattice::cubic(cells, 1.0, true), shift);
        let results = voronoi_vox(&net, &pores, &params).unwrap();

        for (i, p) in pores.iter().enumerate() {
            assert_relative_eq!(
                results.centroids[i],
                net.pore_coords(*p),
                epsilon = params.voxel_length
            );
        }
    }
}
