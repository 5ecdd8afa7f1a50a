//! Collide2D – Narrow-Phase Collision Detection for Rust.
//!
//! This crate exposes the narrow-phase core of a 2D rigid-body physics
//! engine: value-type collision primitives, a stateless pair-query detector,
//! and fixed-capacity contact output that never allocates. Geometry lives in
//! the XY plane while positions and normals are stored as `glam::Vec3` with
//! the Z lane at zero, so results drop straight into vector pipelines.
//!
//! Queries are pure functions of their inputs: the same primitives produce
//! bit-identical contacts on every call, which keeps replays and lockstep
//! simulations deterministic.

pub mod collision;
pub mod config;
pub mod core;
pub mod utils;

pub use glam::{Quat, Vec3};

pub use collision::{
    contact::{Collision, ContactBuffer, MAX_CONTACTS},
    detector::CollisionDetector,
    primitives::{BoxPrimitive, CirclePrimitive, PrimitiveError, RayPrimitive},
};
pub use config::COLLISION_EPSILON;
pub use crate::core::rigidbody::RigidBody;
pub use utils::allocator::{Arena, BodyId, GenerationalId};

/// Empty contact buffer ready to pass to any detector query.
pub fn contact_buffer() -> ContactBuffer {
    [Collision::default(); MAX_CONTACTS]
}
