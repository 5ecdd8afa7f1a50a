//! Core types describing the rigid bodies that contacts are attributed to.

pub mod rigidbody;

pub use rigidbody::RigidBody;
