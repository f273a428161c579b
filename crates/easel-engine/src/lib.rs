//! Easel engine crate.
//!
//! A retained-mode 2D scene layer: primitives register a draw callback once,
//! a [`scene::ShapeRegistry`] redraws every live one each frame, and
//! rectangles, circles and polygons answer point-containment queries for
//! input picking.
//!
//! ```rust,ignore
//! use easel_engine::prelude::*;
//!
//! let mut stage = Stage::default();
//! let style = stage.style();
//! let button = Rectangle::new(stage.registry(), 10.0, 10.0, 80.0, 30.0, style);
//!
//! // Once per animation frame:
//! let mut frame = DrawList::new();
//! stage.tick(&mut frame);
//!
//! // On click:
//! if button.contains(mouse_x, mouse_y) { /* ... */ }
//!
//! // When done with it:
//! button.dispose(stage.registry())?;
//! ```

pub mod coords;
pub mod core;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;

/// Common imports for building scenes.
pub mod prelude {
    pub use crate::coords::{Bounds, Vec2};
    pub use crate::core::{Stage, StageConfig};
    pub use crate::paint::{Color, Style, StyleDefaults};
    pub use crate::scene::{
        pick, Circle, DrawCmd, DrawList, Drawable, Hittable, Line, Polygon, Rectangle, SceneError, Shape,
        ShapeId, ShapeKind, ShapeRegistry, Surface, Text,
    };
    pub use crate::text::{MonospaceMeasure, TextMeasure};
}
