use super::lattice;
use porevox::mass_properties::cube_volume;
use porevox::pore_volume::{voronoi_vox, VoxelParameters};

#[test]
fn two_cubic_pores_converge_to_their_volume() {
    let cells = [2, 1, 1];
    let net = lattice::cubic(cells, 1.0, true);
    let pores = lattice::cube_pores(cells);
    let expected = cube_volume(1.0);
    let mut errors = Vec::new();

    for voxel_length in [0.1, 0.05, 0.025] {
        let params = VoxelParameters::new(voxel_length, 0.0);
        let results = voronoi_vox(&net, &pores, &params).unwrap();
        let error: f64 = results.volumes.iter().map(|v| (v - expected).abs()).sum();
        errors.push(error);

        if voxel_length == 0.025 {
            for v in &results.volumes {
                assert_relative_eq!(*v, expected, max_relative = 0.05);
            }
        }
    }

    assert!(errors[0] > errors[1] && errors[1] > errors[2], "{errors:?}");
}
