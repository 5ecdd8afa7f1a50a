//! Additional math helpers layered on top of `glam`.
//!
//! The engine works in the XY plane and stores poses as full `Vec3`/`Quat`
//! pairs with the Z lane parked at zero, so plane rotations are quaternions
//! about +Z.

use glam::{Quat, Vec3};

/// Builds the orientation for a body rotated by `angle` radians in the plane.
pub fn plane_rotation(angle: f32) -> Quat {
    Quat::from_rotation_z(angle)
}

/// Recovers the plane angle (radians) from an orientation built with
/// [`plane_rotation`].
pub fn plane_angle(orientation: Quat) -> f32 {
    2.0 * orientation.z.atan2(orientation.w)
}

/// Counter-clockwise in-plane perpendicular of `v`.
pub fn perpendicular(v: Vec3) -> Vec3 {
    Vec3::new(-v.y, v.x, 0.0)
}
