//! Utility helpers: id allocation, plane math extensions, and logging.

pub mod allocator;
pub mod logging;
pub mod math;

pub use allocator::{Arena, BodyId, GenerationalId};
pub use logging::ScopedTimer;
pub use math::*;
