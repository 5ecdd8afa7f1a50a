//! Global configuration constants for the Collide2D engine.

/// Shared tolerance for narrow-phase queries (distances are in world units).
///
/// Box projections overlapping by no more than this count as separation.
/// The same band decides when penetration axes are tied and when a vector
/// is too short to normalize safely.
pub const COLLISION_EPSILON: f32 = 1e-4;
