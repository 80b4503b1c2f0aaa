use crate::math::Real;

/// The factor scaling the volume of `num_voxels` voxels back to `domain_volume`.
///
/// The voxel image is one voxel larger than the domain along each axis, which makes
/// voxel volumes slightly too large. Returns `1.0` if either volume is zero or if the
/// factor is not finite.
pub(crate) fn conservation_factor(
    domain_volume: Real,
    num_voxels: usize,
    voxel_volume: Real,
) -> Real {
    let voxelized = num_voxels as Real * voxel_volume;
    let factor = domain_volume / voxelized;

    if voxelized > 0.0 && domain_volume > 0.0 && factor.is_finite() {
        factor
    } else {
        log::warn!(
            "Cannot conserve the domain volume {domain_volume} with a voxelized volume of {voxelized}"
        );
        1.0
    }
}

/// Clamps a volume to a finite non-negative value.
#[inline]
pub(crate) fn sanitize_volume(volume: Real) -> Real {
    if volume.is_finite() && volume > 0.0 {
        volume
    } else {
        0.0
    }
}
