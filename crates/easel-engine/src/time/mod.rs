//! Frame timing.
//!
//! One [`FrameClock`] per driver; `tick()` once per drawn frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
