use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::{Color, Style};
use crate::scene::cmd::PolygonCmd;
use crate::scene::{DrawCmd, SceneError, ShapeId, ShapeRegistry};

use super::{register_shared, Drawable, Hittable};

#[derive(Debug)]
struct RectangleState {
    start: Vec2,
    size: Vec2,
    /// Clockwise from top-left. Rebuilt on every geometry write.
    corners: [Vec2; 4],
    style: Style,
}

impl RectangleState {
    fn new(start: Vec2, size: Vec2, style: Style) -> Self {
        let mut state = Self { start, size, corners: [Vec2::zero(); 4], style };
        state.recompute_corners();
        state
    }

    fn recompute_corners(&mut self) {
        let Vec2 { x, y } = self.start;
        let Vec2 { x: w, y: h } = self.size;
        self.corners = [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ];
    }
}

impl Drawable for RectangleState {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        if !self.style.is_visible() {
            return None;
        }
        Some(DrawCmd::Polygon(PolygonCmd {
            points: self.corners.to_vec(),
            border: self.style.stroke(),
            fill: self.style.fill().clone(),
        }))
    }
}

/// Axis-aligned rectangle.
///
/// The center is not stored: it is always derived from start and size, and
/// writing it moves the start corner.
#[derive(Debug)]
pub struct Rectangle {
    id: ShapeId,
    state: Rc<RefCell<RectangleState>>,
}

impl Rectangle {
    /// Builds the rectangle and registers its draw callback.
    pub fn new(
        registry: &mut ShapeRegistry,
        start_x: f32,
        start_y: f32,
        width: f32,
        height: f32,
        style: Style,
    ) -> Self {
        let state = Rc::new(RefCell::new(RectangleState::new(
            Vec2::new(start_x, start_y),
            Vec2::new(width, height),
            style,
        )));
        let id = register_shared(registry, &state);
        log::debug!("rectangle {id} at ({start_x}, {start_y}) size {width}x{height}");
        Self { id, state }
    }

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Releases this rectangle's registry slot.
    pub fn dispose(self, registry: &mut ShapeRegistry) -> Result<(), SceneError> {
        registry.remove(self.id)
    }

    fn update(&mut self, f: impl FnOnce(&mut RectangleState)) {
        let mut state = self.state.borrow_mut();
        f(&mut state);
        state.recompute_corners();
    }

    // ── geometry ──────────────────────────────────────────────────────────

    pub fn start_x(&self) -> f32 {
        self.state.borrow().start.x
    }

    pub fn set_start_x(&mut self, start_x: f32) {
        self.update(|s| s.start.x = start_x);
    }

    pub fn start_y(&self) -> f32 {
        self.state.borrow().start.y
    }

    pub fn set_start_y(&mut self, start_y: f32) {
        self.update(|s| s.start.y = start_y);
    }

    pub fn width(&self) -> f32 {
        self.state.borrow().size.x
    }

    pub fn set_width(&mut self, width: f32) {
        self.update(|s| s.size.x = width);
    }

    pub fn height(&self) -> f32 {
        self.state.borrow().size.y
    }

    pub fn set_height(&mut self, height: f32) {
        self.update(|s| s.size.y = height);
    }

    pub fn center_x(&self) -> f32 {
        let s = self.state.borrow();
        s.start.x + s.size.x / 2.0
    }

    /// Moves the rectangle horizontally; width is unchanged.
    pub fn set_center_x(&mut self, center_x: f32) {
        self.update(|s| s.start.x = center_x - s.size.x / 2.0);
    }

    pub fn center_y(&self) -> f32 {
        let s = self.state.borrow();
        s.start.y + s.size.y / 2.0
    }

    /// Moves the rectangle vertically; height is unchanged.
    pub fn set_center_y(&mut self, center_y: f32) {
        self.update(|s| s.start.y = center_y - s.size.y / 2.0);
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// Corner points, clockwise from top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        self.state.borrow().corners
    }

    pub fn area(&self) -> f32 {
        let s = self.state.borrow();
        s.size.x * s.size.y
    }

    // ── style ─────────────────────────────────────────────────────────────

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

impl Drawable for Rectangle {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        self.state.borrow().draw_cmd()
    }
}

impl Hittable for Rectangle {
    /// Inclusive axis-aligned test against the cached corners.
    ///
    /// Only valid because rectangles are never rotated.
    fn contains(&self, x: f32, y: f32) -> bool {
        let s = self.state.borrow();
        x >= s.start.x && x <= s.corners[1].x && y >= s.start.y && y <= s.corners[3].y
    }
}
