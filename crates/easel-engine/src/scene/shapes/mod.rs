//! Retained primitives.
//!
//! Every primitive registers one draw callback with a [`ShapeRegistry`] when
//! it is built and releases it in `dispose`. Geometry lives behind an
//! `Rc<RefCell<_>>` shared with that callback; the callback only holds a
//! `Weak`, so a handle dropped without `dispose` stops drawing immediately.

pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rectangle;
pub(crate) mod text;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::{DrawCmd, SceneError, ShapeId, ShapeRegistry, Surface};

pub use circle::Circle;
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use text::Text;

/// Produces the draw request for the current state.
///
/// Returns `None` while hidden.
pub trait Drawable {
    fn draw_cmd(&self) -> Option<DrawCmd>;
}

/// Point containment for input picking.
///
/// Only primitives with an area implement this.
pub trait Hittable {
    fn contains(&self, x: f32, y: f32) -> bool;
}

/// Discriminant of [`Shape`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Polygon,
    Line,
    Text,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Line => "line",
            ShapeKind::Text => "text",
        })
    }
}

/// Closed set of primitives, for code that handles them uniformly
/// (picking, bulk disposal).
#[derive(Debug)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Polygon(Polygon),
    Line(Line),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Polygon(s) => s.id(),
            Shape::Line(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Text(_) => ShapeKind::Text,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Shape::Rectangle(s) => s.is_visible(),
            Shape::Circle(s) => s.is_visible(),
            Shape::Polygon(s) => s.is_visible(),
            Shape::Line(s) => s.is_visible(),
            Shape::Text(s) => s.is_visible(),
        }
    }

    /// The containment capability, if this primitive has one.
    pub fn as_hittable(&self) -> Option<&dyn Hittable> {
        match self {
            Shape::Rectangle(s) => Some(s),
            Shape::Circle(s) => Some(s),
            Shape::Polygon(s) => Some(s),
            Shape::Line(_) | Shape::Text(_) => None,
        }
    }

    /// Point containment, or [`SceneError::NotSupported`] for lines and text.
    pub fn contains(&self, x: f32, y: f32) -> Result<bool, SceneError> {
        match self.as_hittable() {
            Some(h) => Ok(h.contains(x, y)),
            None => Err(not_supported(self.kind(), "contains")),
        }
    }

    /// Releases the registry slot of the wrapped primitive.
    pub fn dispose(self, registry: &mut ShapeRegistry) -> Result<(), SceneError> {
        registry.remove(self.id())
    }
}

impl Drawable for Shape {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        match self {
            Shape::Rectangle(s) => s.draw_cmd(),
            Shape::Circle(s) => s.draw_cmd(),
            Shape::Polygon(s) => s.draw_cmd(),
            Shape::Line(s) => s.draw_cmd(),
            Shape::Text(s) => s.draw_cmd(),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Text> for Shape {
    fn from(s: Text) -> Self {
        Shape::Text(s)
    }
}

#[inline]
pub(crate) fn not_supported(kind: ShapeKind, operation: &'static str) -> SceneError {
    SceneError::NotSupported { kind, operation }
}

/// Registers a callback that draws whatever `state` currently describes.
pub(crate) fn register_shared<S>(registry: &mut ShapeRegistry, state: &Rc<RefCell<S>>) -> ShapeId
where
    S: Drawable + 'static,
{
    let weak = Rc::downgrade(state);
    registry.register(move |surface: &mut dyn Surface| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        if let Some(cmd) = state.borrow().draw_cmd() {
            cmd.submit(surface);
        }
    })
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, Style};
    use crate::scene::DrawList;
    use crate::text::MonospaceMeasure;

    fn scene(registry: &mut ShapeRegistry) -> Vec<Shape> {
        vec![
            Rectangle::new(registry, 0.0, 0.0, 10.0, 10.0, Style::default()).into(),
            Circle::new(registry, 20.0, 20.0, 5.0, Style::default()).into(),
            Line::new(registry, Vec2::zero(), Vec2::new(5.0, 5.0), 1.0, Some(Color::black())).into(),
            Text::new(registry, "hi", 0.0, 0.0, 10.0, Some(Color::black()), Rc::new(MonospaceMeasure::default())).into(),
        ]
    }

    #[test]
    fn contains_dispatches_on_capability() {
        let mut registry = ShapeRegistry::new();
        let shapes = scene(&mut registry);

        assert_eq!(shapes[0].contains(5.0, 5.0), Ok(true));
        assert_eq!(shapes[1].contains(0.0, 0.0), Ok(false));
        assert_eq!(
            shapes[2].contains(1.0, 1.0),
            Err(SceneError::NotSupported { kind: ShapeKind::Line, operation: "contains" })
        );
        assert_eq!(
            shapes[3].contains(0.0, 0.0),
            Err(SceneError::NotSupported { kind: ShapeKind::Text, operation: "contains" })
        );
    }

    #[test]
    fn not_supported_message_names_the_kind() {
        let err = not_supported(ShapeKind::Text, "contains");
        assert_eq!(err.to_string(), "text does not support contains");
    }

    #[test]
    fn every_live_shape_draws_once_per_frame() {
        let mut registry = ShapeRegistry::new();
        let shapes = scene(&mut registry);

        let mut list = DrawList::new();
        registry.draw_all(&mut list);
        assert_eq!(list.len(), shapes.len());

        let kinds: Vec<ShapeKind> = shapes.iter().map(Shape::kind).collect();
        assert_eq!(kinds, vec![ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Line, ShapeKind::Text]);
    }

    #[test]
    fn disposing_a_shape_stops_its_drawing() {
        let mut registry = ShapeRegistry::new();
        let mut shapes = scene(&mut registry);
        let circle = shapes.remove(1);
        let id = circle.id();

        circle.dispose(&mut registry).unwrap();
        assert!(!registry.is_live(id));

        let mut list = DrawList::new();
        registry.draw_all(&mut list);
        assert_eq!(list.len(), 3);
        assert!(list.items().iter().all(|cmd| !matches!(cmd, DrawCmd::Circle(_))));
    }

    #[test]
    fn dropped_handle_draws_nothing() {
        let mut registry = ShapeRegistry::new();
        let rect = Rectangle::new(&mut registry, 0.0, 0.0, 1.0, 1.0, Style::default());
        drop(rect);

        let mut list = DrawList::new();
        registry.draw_all(&mut list);
        assert!(list.is_empty());
        assert_eq!(registry.live_count(), 1);
    }
}
