//! Frame driving.
//!
//! The host window is external: it owns the real canvas and calls
//! [`Stage::tick`] once per animation frame. Input dispatch stays with the
//! host; it can use [`crate::scene::pick`] against the stage's shapes.

mod stage;

pub use stage::{Stage, StageConfig, UpdateFn};
