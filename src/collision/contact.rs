use crate::utils::allocator::BodyId;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Upper bound on contacts a single pair query can produce.
///
/// Circle and ray queries emit at most one contact; box-box face clipping
/// emits at most two. Buffers passed to the detector must hold at least this
/// many records.
pub const MAX_CONTACTS: usize = 2;

/// Fixed-capacity output buffer filled by the pair queries.
///
/// Queries return how many leading slots they wrote and never touch the
/// rest, so one buffer can be reused across an entire batch without
/// clearing it in between.
pub type ContactBuffer = [Collision; MAX_CONTACTS];

/// Single contact produced by a narrow-phase query.
///
/// `normal` is unit length and `penetration` is the non-negative overlap
/// depth along it. Which body each id slot refers to is part of every
/// query's contract; a [`BodyId::NULL`] slot means static world geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Collision {
    /// World-space contact point.
    pub position: Vec3,
    /// Unit contact normal.
    pub normal: Vec3,
    /// Overlap depth along `normal`, or the hit distance for ray queries.
    pub penetration: f32,
    pub body1: BodyId,
    pub body2: BodyId,
}

impl Collision {
    /// True if either attribution slot carries `body`.
    pub fn involves(&self, body: BodyId) -> bool {
        self.body1 == body || self.body2 == body
    }
}
