use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::{Color, Style};
use crate::scene::cmd::CircleCmd;
use crate::scene::{DrawCmd, SceneError, ShapeId, ShapeRegistry};

use super::{register_shared, Drawable, Hittable};

#[derive(Debug)]
struct CircleState {
    center: Vec2,
    radius: f32,
    style: Style,
}

impl Drawable for CircleState {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        if !self.style.is_visible() {
            return None;
        }
        Some(DrawCmd::Circle(CircleCmd {
            center: self.center,
            radius: self.radius,
            border: self.style.stroke(),
            fill: self.style.fill().clone(),
        }))
    }
}

/// Circle given by center and radius.
#[derive(Debug)]
pub struct Circle {
    id: ShapeId,
    state: Rc<RefCell<CircleState>>,
}

impl Circle {
    /// Builds the circle and registers its draw callback.
    pub fn new(registry: &mut ShapeRegistry, center_x: f32, center_y: f32, radius: f32, style: Style) -> Self {
        let state = Rc::new(RefCell::new(CircleState {
            center: Vec2::new(center_x, center_y),
            radius,
            style,
        }));
        let id = register_shared(registry, &state);
        log::debug!("circle {id} at ({center_x}, {center_y}) r={radius}");
        Self { id, state }
    }

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Releases this circle's registry slot.
    pub fn dispose(self, registry: &mut ShapeRegistry) -> Result<(), SceneError> {
        registry.remove(self.id)
    }

    pub fn center_x(&self) -> f32 {
        self.state.borrow().center.x
    }

    pub fn set_center_x(&mut self, center_x: f32) {
        self.state.borrow_mut().center.x = center_x;
    }

    pub fn center_y(&self) -> f32 {
        self.state.borrow().center.y
    }

    pub fn set_center_y(&mut self, center_y: f32) {
        self.state.borrow_mut().center.y = center_y;
    }

    pub fn center(&self) -> Vec2 {
        self.state.borrow().center
    }

    pub fn radius(&self) -> f32 {
        self.state.borrow().radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.state.borrow_mut().radius = radius;
    }

    pub fn area(&self) -> f32 {
        let r = self.radius();
        PI * r * r
    }

    pub fn style(&self) -> Style {
        self.state.borrow().style.clone()
    }

    pub fn fill(&self) -> Color {
        self.state.borrow().style.fill().clone()
    }

    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.state.borrow_mut().style.set_fill(fill);
    }

    pub fn border(&self) -> Color {
        self.state.borrow().style.border().clone()
    }

    pub fn set_border(&mut self, border: Option<Color>) {
        self.state.borrow_mut().style.set_border(border);
    }

    pub fn border_width(&self) -> f32 {
        self.state.borrow().style.border_width()
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.state.borrow_mut().style.set_border_width(width);
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().style.is_visible()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().style.set_visible(visible);
    }
}

impl Drawable for Circle {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        self.state.borrow().draw_cmd()
    }
}

impl Hittable for Circle {
    /// Distance to center `<= radius`; the rim is inside.
    fn contains(&self, x: f32, y: f32) -> bool {
        let s = self.state.borrow();
        Vec2::new(x, y).distance(s.center) <= s.radius
    }
}
