//! Text measurement.
//!
//! Text labels need the rendered width of their content to center
//! themselves. Measurement is injected through [`TextMeasure`] so the scene
//! does not depend on a particular font stack.

mod font_system;
mod measure;

pub use font_system::{FontLoadError, FontMeasure};
pub use measure::{MonospaceMeasure, TextMeasure};
