use super::lattice;
use porevox::pore_volume::{voronoi_vox, watershed_vox, VoxelParameters};

#[test]
fn watershed_agrees_with_nearest_pores() {
    let cells = [2, 2, 1];
    let net = lattice::cubic(cells, 1.0, true);
    let pores = lattice::cube_pores(cells);
    let params = VoxelParameters::new(0.05, 0.05);

    let nearest = voronoi_vox(&net, &pores, &params).unwrap();
    let watershed = watershed_vox(&net, &pores, &params).unwrap();

    let total = |counts: &[u64]| counts.iter().sum::<u64>();
    assert_eq!(
        total(&nearest.pore_voxels) + total(&nearest.fibre_voxels),
        total(&watershed.pore_voxels) + total(&watershed.fibre_voxels)
    );
    assert_relative_eq!(
        nearest.total_bulk_volume(),
        watershed.total_bulk_volume(),
        max_relative = 1.0e-12
    );

    for i in 0..pores.len() {
        assert_relative_eq!(nearest.volumes[i], watershed.volumes[i], max_relative = 0.1);
        assert_relative_eq!(nearest.centroids[i], watershed.centroids[i], epsilon = 0.1);
    }
}
