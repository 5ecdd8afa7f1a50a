//! Collision primitives consumed by the narrow-phase queries.
//!
//! Primitives are plain value snapshots, decoupled from whatever body they
//! were derived from. A caller typically rebuilds them each step from the
//! owning body's pose, which is why they carry world-space data directly
//! instead of a local offset plus a body reference.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Validation failure raised by the checked primitive constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveError {
    /// A position, origin, or direction component is NaN or infinite.
    NonFiniteCoordinate,
    /// Circle radius is negative, NaN, or infinite.
    InvalidRadius(f32),
    /// Box half-extent is not strictly positive and finite.
    InvalidHalfExtent(f32),
    /// Box orientation quaternion is not unit length.
    NonUnitOrientation,
}

impl fmt::Display for PrimitiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveError::NonFiniteCoordinate => {
                write!(f, "primitive coordinate is NaN or infinite")
            }
            PrimitiveError::InvalidRadius(radius) => {
                write!(f, "circle radius {radius} is not a finite non-negative value")
            }
            PrimitiveError::InvalidHalfExtent(extent) => {
                write!(f, "box half-extent {extent} is not a finite positive value")
            }
            PrimitiveError::NonUnitOrientation => {
                write!(f, "box orientation quaternion is not normalized")
            }
        }
    }
}

impl Error for PrimitiveError {}

/// Circle described by its world-space center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub position: Vec3,
    pub radius: f32,
}

impl CirclePrimitive {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Constructor that rejects non-finite centers and negative radii.
    pub fn try_new(position: Vec3, radius: f32) -> Result<Self, PrimitiveError> {
        if !position.is_finite() {
            return Err(PrimitiveError::NonFiniteCoordinate);
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(PrimitiveError::InvalidRadius(radius));
        }
        Ok(Self { position, radius })
    }
}

/// Oriented rectangle described by its world-space center, half-extents along
/// its local axes, and an in-plane orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxPrimitive {
    pub position: Vec3,
    pub half_width: f32,
    pub half_height: f32,
    pub orientation: Quat,
}

impl Default for BoxPrimitive {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            half_width: 0.5,
            half_height: 0.5,
            orientation: Quat::IDENTITY,
        }
    }
}

impl BoxPrimitive {
    pub fn new(position: Vec3, half_width: f32, half_height: f32, orientation: Quat) -> Self {
        Self {
            position,
            half_width,
            half_height,
            orientation,
        }
    }

    /// Box with its local axes aligned to the world axes.
    pub fn axis_aligned(position: Vec3, half_width: f32, half_height: f32) -> Self {
        Self::new(position, half_width, half_height, Quat::IDENTITY)
    }

    /// Constructor that rejects degenerate extents and denormalized
    /// orientations.
    pub fn try_new(
        position: Vec3,
        half_width: f32,
        half_height: f32,
        orientation: Quat,
    ) -> Result<Self, PrimitiveError> {
        if !position.is_finite() {
            return Err(PrimitiveError::NonFiniteCoordinate);
        }
        for extent in [half_width, half_height] {
            if !extent.is_finite() || extent <= 0.0 {
                return Err(PrimitiveError::InvalidHalfExtent(extent));
            }
        }
        if !orientation.is_finite() || !orientation.is_normalized() {
            return Err(PrimitiveError::NonUnitOrientation);
        }
        Ok(Self {
            position,
            half_width,
            half_height,
            orientation,
        })
    }

    /// World-space unit vectors of the box's local X and Y axes.
    pub fn axes(&self) -> (Vec3, Vec3) {
        (self.orientation * Vec3::X, self.orientation * Vec3::Y)
    }

    /// Half-length of the box's projection onto `axis` (assumed unit length).
    pub fn projected_radius(&self, axis: Vec3) -> f32 {
        let (local_x, local_y) = self.axes();
        self.half_width * local_x.dot(axis).abs() + self.half_height * local_y.dot(axis).abs()
    }

    /// Maps a world-space point into the box's local frame.
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        self.orientation.conjugate() * (point - self.position)
    }

    /// Maps a point from the box's local frame back to world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.orientation * local
    }
}

/// Ray described by a world-space origin and direction.
///
/// The direction does not have to be unit length; reported hit distances are
/// world distances along the direction as given. A zero direction is treated
/// as a degenerate ray that hits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RayPrimitive {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl RayPrimitive {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Constructor that rejects non-finite origins and directions.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Result<Self, PrimitiveError> {
        if !origin.is_finite() || !direction.is_finite() {
            return Err(PrimitiveError::NonFiniteCoordinate);
        }
        Ok(Self { origin, direction })
    }

    /// Point reached after travelling `t` along the (unnormalized) direction.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math::plane_rotation;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn box_axes_follow_orientation() {
        let shape = BoxPrimitive::new(Vec3::ZERO, 2.0, 1.0, plane_rotation(FRAC_PI_2));
        let (x_axis, y_axis) = shape.axes();
        assert_abs_diff_eq!(x_axis.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(y_axis.x, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn projected_radius_matches_hand_computation() {
        let shape = BoxPrimitive::axis_aligned(Vec3::ZERO, 2.0, 1.0);
        assert_abs_diff_eq!(shape.projected_radius(Vec3::X), 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(shape.projected_radius(Vec3::Y), 1.0, epsilon = 1e-6);

        let diagonal = Vec3::new(1.0, 1.0, 0.0).normalize();
        let expected = (2.0 + 1.0) * std::f32::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(shape.projected_radius(diagonal), expected, epsilon = 1e-5);
    }

    #[test]
    fn local_world_mapping_roundtrips() {
        let shape = BoxPrimitive::new(
            Vec3::new(3.0, -1.0, 0.0),
            1.0,
            0.5,
            plane_rotation(0.7),
        );
        let point = Vec3::new(2.25, 0.5, 0.0);
        let roundtrip = shape.to_world(shape.to_local(point));
        assert_abs_diff_eq!((roundtrip - point).length(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn checked_constructors_reject_bad_input() {
        assert_eq!(
            CirclePrimitive::try_new(Vec3::ZERO, -1.0),
            Err(PrimitiveError::InvalidRadius(-1.0))
        );
        assert_eq!(
            CirclePrimitive::try_new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0),
            Err(PrimitiveError::NonFiniteCoordinate)
        );
        assert_eq!(
            BoxPrimitive::try_new(Vec3::ZERO, 0.0, 1.0, Quat::IDENTITY),
            Err(PrimitiveError::InvalidHalfExtent(0.0))
        );
        assert_eq!(
            BoxPrimitive::try_new(Vec3::ZERO, 1.0, 1.0, Quat::from_xyzw(0.0, 0.0, 0.0, 2.0)),
            Err(PrimitiveError::NonUnitOrientation)
        );
        assert!(RayPrimitive::try_new(Vec3::ZERO, Vec3::ZERO).is_ok());
        assert!(RayPrimitive::try_new(Vec3::ZERO, Vec3::new(0.0, f32::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn ray_point_at_scales_with_direction() {
        let ray = RayPrimitive::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.point_at(1.5), Vec3::new(4.0, 0.0, 0.0));
    }
}
