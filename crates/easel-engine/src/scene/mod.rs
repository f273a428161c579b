//! Retained scene: shape registry, primitives and the draw stream.
//!
//! Responsibilities:
//! - give every primitive a stable [`ShapeId`] and redraw each live one once per frame
//! - keep per-primitive derived geometry consistent with its accessors
//! - answer point-containment queries for input picking
//! - describe drawing as surface-agnostic [`DrawCmd`]s

pub(crate) mod cmd;
mod error;
mod list;
mod pick;
mod registry;
mod surface;

pub mod shapes;

pub use cmd::{CircleCmd, DrawCmd, LineCmd, PolygonCmd, TextCmd};
pub use error::SceneError;
pub use list::DrawList;
pub use pick::pick;
pub use registry::{DrawFn, ShapeId, ShapeRegistry};
pub use shapes::{Circle, Drawable, Hittable, Line, Polygon, Rectangle, Shape, ShapeKind, Text};
pub use surface::Surface;
