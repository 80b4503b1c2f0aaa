use na::Point3;
use porevox::mass_properties::{hull_volume_and_centroid, try_hull_volume_and_centroid};
use porevox::transformation::{try_convex_hull, ConvexHullError};

fn unit_cube() -> Vec<Point3<f64>> {
    (0..8)
        .map(|i| Point3::new((i & 1) as f64, ((i >> 1) & 1) as f64, (i >> 2) as f64))
        .collect()
}

#[test]
fn unit_cube_volume_and_centroid() {
    let props = hull_volume_and_centroid(&unit_cube());
    assert_relative_eq!(props.volume, 1.0, epsilon = 1.0e-12);
    assert_relative_eq!(props.centroid, Point3::new(0.5, 0.5, 0.5), epsilon = 1.0e-12);
}

#[test]
fn coplanar_points_have_no_volume() {
    let pts: Vec<_> = (0..20)
        .map(|i| Point3::new((i % 5) as f64 * 0.1, 0.3, (i / 5) as f64 * 0.2))
        .collect();

    let props = hull_volume_and_centroid(&pts);
    assert_eq!(props.volume, 0.0);
    assert!(matches!(
        try_hull_volume_and_centroid(&pts),
        Err(ConvexHullError::Degenerate { dimension: 2 })
    ));
}

#[test]
fn random_clouds_match_tetrahedral_decomposition() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..20 {
        let pts: Vec<_> = (0..50)
            .map(|_| Point3::new(rng.rand_float(), rng.rand_float() * 2.0, rng.rand_float() * 0.5))
            .collect();

        let (vertices, triangles) = try_convex_hull(&pts).unwrap();
        let inner = porevox::utils::center(&vertices).unwrap();

        // The hull triangles are oriented outward.
        let mut volume = 0.0;
        let mut moment = na::Vector3::zeros();
        for tri in &triangles {
            let a = vertices[tri[0] as usize] - inner;
            let b = vertices[tri[1] as usize] - inner;
            let c = vertices[tri[2] as usize] - inner;
            let tet = a.dot(&b.cross(&c)) / 6.0;
            assert!(tet >= -1.0e-12);
            volume += tet;
            moment += (a + b + c) * (tet / 4.0);
        }

        let props = hull_volume_and_centroid(&pts);
        assert_relative_eq!(props.volume, volume, max_relative = 1.0e-9);

        // Both decompositions give the exact center of mass of the hull.
        let expected = inner + moment / volume;
        assert_relative_eq!(props.centroid, expected, epsilon = 1.0e-9);
    }
}
