use na::{Point3, Rotation3, Vector3};
use porevox::transformation::rasterize_faces;

fn square(side: f64) -> Vec<Point3<f64>> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(side, 0.0, 0.0),
        Point3::new(side, side, 0.0),
        Point3::new(0.0, side, 0.0),
    ]
}

#[test]
fn square_sample_count_is_proportional_to_perimeter() {
    for (side, step) in [(1.0, 0.1), (2.0, 0.03), (5.0, 0.7)] {
        let samples = rasterize_faces(&[square(side)], step);
        let perimeter_samples = 4.0 * side / step;

        assert!(samples.len() as f64 >= perimeter_samples);
        assert!(samples.len() as f64 <= perimeter_samples + 8.0);

        for w in samples.windows(2) {
            assert_ne!(w[0], w[1]);
        }
    }
}

#[test]
fn rotated_squares_are_sampled_densely() {
    let rot = Rotation3::from_axis_angle(&Vector3::y_axis(), 1.1)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), 0.4);
    let face: Vec<_> = square(1.0)
        .iter()
        .map(|pt| rot * pt + Vector3::new(3.0, -1.0, 2.0))
        .collect();
    // Unordered vertices are walked along the square outline.
    let shuffled = vec![face[0], face[2], face[1], face[3]];

    let samples = rasterize_faces(&[shuffled], 0.05);
    assert!(samples.len() >= 80 && samples.len() <= 88);

    for w in samples.windows(2) {
        assert!(na::distance(&w[0], &w[1]) <= 0.05 + 1.0e-12);
        assert_ne!(w[0], w[1]);
    }
}
