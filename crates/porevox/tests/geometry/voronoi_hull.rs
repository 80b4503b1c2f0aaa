use super::lattice;
use porevox::network::PoreNetwork;
use porevox::pore_volume::voronoi_hull;

#[test]
fn cubic_cells() {
    let cells = [3, 2, 2];
    let net = lattice::cubic(cells, 2.0, true);
    let all: Vec<_> = (0..net.num_pores()).collect();
    let results = voronoi_hull(&net, &all).unwrap();

    for pore in lattice::cube_pores(cells) {
        assert_relative_eq!(results.volumes[pore], 8.0, epsilon = 1.0e-9);
        assert_relative_eq!(results.centroids[pore], net.pore_coords(pore), epsilon = 1.0e-9);
    }

    // Boundary pores are dead ends, centered on their face.
    for pore in (0..net.num_pores()).filter(|p| net.is_boundary_pore(*p)) {
        assert_eq!(results.volumes[pore], 0.0);
        assert_relative_eq!(results.centroids[pore], net.pore_coords(pore), epsilon = 1.0e-12);
    }

    assert_relative_eq!(results.total_volume(), 12.0 * 8.0, epsilon = 1.0e-8);
}

#[test]
fn a_subset_of_pores() {
    let net = lattice::cubic([2, 2, 2], 1.0, false);
    let results = voronoi_hull(&net, &[7, 0]).unwrap();

    assert_eq!(results.position(0), Some(1));
    // Without boundary pores, a corner cube only has its three inner faces as throats,
    // and their hull misses the tetrahedron at the outer corner.
    for v in &results.volumes {
        assert_relative_eq!(*v, 5.0 / 6.0, epsilon = 1.0e-9);
    }
}
