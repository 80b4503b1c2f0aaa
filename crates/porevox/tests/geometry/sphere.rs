use na::{Point3, RealField};
use porevox::mass_properties::{hull_volume_and_centroid, sphere_volume};

#[test]
fn sphere_of_diameter_one_half() {
    assert_relative_eq!(sphere_volume(0.5), 0.06545, epsilon = 1.0e-5);
}

#[test]
fn hull_of_sphere_samples() {
    // Fibonacci sampling of the sphere of diameter 0.5 centered at (1, 2, 3).
    let n = 2000;
    let golden = f64::pi() * (3.0 - 5.0f64.sqrt());
    let center = Point3::new(1.0, 2.0, 3.0);
    let pts: Vec<_> = (0..n)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / n as f64;
            let r = (1.0 - y * y).sqrt();
            let theta = golden * i as f64;
            center + na::Vector3::new(r * theta.cos(), y, r * theta.sin()) * 0.25
        })
        .collect();

    let props = hull_volume_and_centroid(&pts);
    assert!(props.volume < sphere_volume(0.5));
    assert_relative_eq!(props.volume, sphere_volume(0.5), max_relative = 0.01);
    assert_relative_eq!(props.centroid, center, epsilon = 1.0e-3);
}
