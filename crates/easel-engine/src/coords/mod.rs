//! Coordinate and geometry types shared by the scene primitives.
//!
//! Canonical space:
//! - canvas pixels
//! - origin top-left
//! - +X right, +Y down

mod bounds;
mod ring;
mod vec2;

pub use bounds::Bounds;
pub use ring::{centroid, ray_crossing, ring_contains};
pub use vec2::Vec2;
