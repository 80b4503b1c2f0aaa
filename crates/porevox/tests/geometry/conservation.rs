use super::lattice;
use porevox::network::PoreNetwork;
use porevox::pore_volume::{voronoi_vox, VoxelParameters};

#[test]
fn corrected_volumes_fill_the_domain() {
    let cells = [3, 2, 2];
    let net = lattice::jittered(cells, 1.0, 0.1, 3);
    let pores = lattice::cube_pores(cells);
    let params = VoxelParameters::new(0.1, 0.15);

    let results = voronoi_vox(&net, &pores, &params).unwrap();
    assert_relative_eq!(net.vertex_domain_volume(), 12.0, epsilon = 1.0e-12);
    assert_relative_eq!(results.total_bulk_volume(), 12.0, max_relative = 1.0e-9);
    assert!(results.correction < 1.0);
    assert!(results.images.is_none());

    // Every voxel of the 31 x 21 x 21 image is owned by a cube pore.
    let voxels: u64 = results.pore_voxels.iter().chain(&results.fibre_voxels).sum();
    assert_eq!(voxels, 31 * 21 * 21);
    assert!(results.fibre_voxels.iter().all(|n| *n > 0));
}

#[test]
fn uncorrected_volumes_count_voxels() {
    let cells = [2, 2, 2];
    let net = lattice::cubic(cells, 1.0, true);
    let mut params = VoxelParameters::new(0.25, 0.0);
    params.conserve_volume = false;

    let results = voronoi_vox(&net, &lattice::cube_pores(cells), &params).unwrap();
    assert_eq!(results.correction, 1.0);
    assert_relative_eq!(results.total_bulk_volume(), 9.0 * 9.0 * 9.0 / 64.0, max_relative = 1.0e-12);

    for (i, voxels) in results.pore_voxels.iter().enumerate() {
        assert_relative_eq!(results.volumes[i], *voxels as f64 / 64.0, max_relative = 1.0e-12);
    }
}
