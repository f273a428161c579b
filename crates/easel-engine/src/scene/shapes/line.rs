use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::cmd::LineCmd;
use crate::scene::{DrawCmd, SceneError, ShapeId, ShapeKind, ShapeRegistry};

use super::{not_supported, register_shared, Drawable};

#[derive(Debug)]
struct LineState {
    start: Vec2,
    end: Vec2,
    width: f32,
    color: Color,
    visible: bool,
}

impl Drawable for LineState {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        self.visible.then(|| {
            DrawCmd::Line(LineCmd {
                start: self.start,
                end: self.end,
                width: self.width,
                color: self.color.clone(),
            })
        })
    }
}

/// Straight segment. Lines have no area and take no part in hit testing.
#[derive(Debug)]
pub struct Line {
    id: ShapeId,
    state: Rc<RefCell<LineState>>,
}

impl Line {
    /// Builds the line and registers its draw callback.
    ///
    /// A `None` color draws a transparent line.
    pub fn new(registry: &mut ShapeRegistry, start: Vec2, end: Vec2, width: f32, color: Option<Color>) -> Self {
        let state = Rc::new(RefCell::new(LineState {
            start,
            end,
            width,
            color: Color::or_transparent(color),
            visible: true,
        }));
        let id = register_shared(registry, &state);
        log::debug!("line {id} from {start:?} to {end:?}");
        Self { id, state }
    }

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Releases this line's registry slot.
    pub fn dispose(self, registry: &mut ShapeRegistry) -> Result<(), SceneError> {
        registry.remove(self.id)
    }

    /// Always [`SceneError::NotSupported`].
    pub fn contains(&self, _x: f32, _y: f32) -> Result<bool, SceneError> {
        Err(not_supported(ShapeKind::Line, "contains"))
    }

    pub fn start_x(&self) -> f32 {
        self.state.borrow().start.x
    }

    pub fn set_start_x(&mut self, x: f32) {
        self.state.borrow_mut().start.x = x;
    }

    pub fn start_y(&self) -> f32 {
        self.state.borrow().start.y
    }

    pub fn set_start_y(&mut self, y: f32) {
        self.state.borrow_mut().start.y = y;
    }

    pub fn end_x(&self) -> f32 {
        self.state.borrow().end.x
    }

    pub fn set_end_x(&mut self, x: f32) {
        self.state.borrow_mut().end.x = x;
    }

    pub fn end_y(&self) -> f32 {
        self.state.borrow().end.y
    }

    pub fn set_end_y(&mut self, y: f32) {
        self.state.borrow_mut().end.y = y;
    }

    pub fn length(&self) -> f32 {
        let s = self.state.borrow();
        s.start.distance(s.end)
    }

    pub fn line_width(&self) -> f32 {
        self.state.borrow().width
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.state.borrow_mut().width = width;
    }

    pub fn color(&self) -> Color {
        self.state.borrow().color.clone()
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.state.borrow_mut().color = Color::or_transparent(color);
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
}

impl Drawable for Line {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        self.state.borrow().draw_cmd()
    }
}
