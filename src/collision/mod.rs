//! Narrow-phase collision detection: primitives, contact records, clipping,
//! and the pair query detector.

pub mod clipping;
pub mod contact;
pub mod detector;
pub mod primitives;

pub use contact::{Collision, ContactBuffer, MAX_CONTACTS};
pub use detector::CollisionDetector;
pub use primitives::{BoxPrimitive, CirclePrimitive, PrimitiveError, RayPrimitive};
