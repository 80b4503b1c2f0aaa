use crate::math::Real;
use na::RealField;

/// The volume of a spherical pore body of diameter `diameter`.
#[inline]
pub fn sphere_volume(diameter: Real) -> Real {
    Real::pi() / 6.0 * diameter * diameter * diameter
}

/// The volume of a cubic pore body of edge length `diameter`.
#[inline]
pub fn cube_volume(diameter: Real) -> Real {
    diameter * diameter * diameter
}
