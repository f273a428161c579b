//! Paint model shared by the primitives and drawing surfaces.
//!
//! Scope:
//! - clamped color value types rendered as CSS color strings
//! - per-primitive style (fill, border, visibility) and its defaults
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod style;

pub use color::{clamp_8bit, clamp_decimal, clamp_degrees, clamp_percent, Color, Hsl, Hsla, Rgb, Rgba};
pub use style::{Border, Style, StyleDefaults};
