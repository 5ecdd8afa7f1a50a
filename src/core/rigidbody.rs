use crate::utils::allocator::BodyId;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Minimal rigid-body description: an identity contacts can be attributed to
/// plus the pose callers snapshot collision primitives from.
///
/// The detector itself never reads this type. It is the element the body
/// store hands out, and its `id` is what query results carry. Positions live
/// in the XY plane; orientations are rotations about +Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub id: BodyId,
    pub position: Vec3,
    pub orientation: Quat,
    pub is_static: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            id: BodyId::NULL,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            is_static: false,
        }
    }
}

impl RigidBody {
    pub fn new(id: BodyId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_pose(id: BodyId, position: Vec3, orientation: Quat) -> Self {
        Self {
            id,
            position,
            orientation,
            is_static: false,
        }
    }

    /// Immovable body, still addressable through the store.
    pub fn fixed(id: BodyId, position: Vec3, orientation: Quat) -> Self {
        Self {
            id,
            position,
            orientation,
            is_static: true,
        }
    }
}
