use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::cmd::TextCmd;
use crate::scene::{DrawCmd, SceneError, ShapeId, ShapeKind, ShapeRegistry};
use crate::text::TextMeasure;

use super::{not_supported, register_shared, Drawable};

struct TextState {
    content: String,
    center: Vec2,
    size: f32,
    color: Color,
    visible: bool,
    /// Baseline start; rebuilt whenever content, center or size change.
    anchor: Vec2,
    measure: Rc<dyn TextMeasure>,
}

impl TextState {
    fn width(&self) -> f32 {
        self.measure.measure_width(&self.content, self.size)
    }

    fn recompute_anchor(&mut self) {
        self.anchor = Vec2::new(self.center.x - self.width() / 2.0, self.center.y + self.size / 4.0);
    }
}

impl fmt::Debug for TextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextState")
            .field("content", &self.content)
            .field("center", &self.center)
            .field("size", &self.size)
            .field("color", &self.color)
            .field("visible", &self.visible)
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}

impl Drawable for TextState {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        self.visible.then(|| {
            DrawCmd::Text(TextCmd {
                text: self.content.clone(),
                anchor: self.anchor,
                size: self.size,
                color: self.color.clone(),
            })
        })
    }
}

/// Single-line text label centered horizontally on `center_x`.
///
/// The baseline sits a quarter of the font size below `center_y`.
#[derive(Debug)]
pub struct Text {
    id: ShapeId,
    state: Rc<RefCell<TextState>>,
}

impl Text {
    /// Builds the label and registers its draw callback.
    ///
    /// `measure` is kept and consulted again on every content, center or
    /// size change.
    pub fn new(
        registry: &mut ShapeRegistry,
        content: impl Into<String>,
        center_x: f32,
        center_y: f32,
        size: f32,
        color: Option<Color>,
        measure: Rc<dyn TextMeasure>,
    ) -> Self {
        let mut state = TextState {
            content: content.into(),
            center: Vec2::new(center_x, center_y),
            size,
            color: Color::or_transparent(color),
            visible: true,
            anchor: Vec2::zero(),
            measure,
        };
        state.recompute_anchor();

        let state = Rc::new(RefCell::new(state));
        let id = register_shared(registry, &state);
        log::debug!("text {id} {:?} at ({center_x}, {center_y})", state.borrow().content);
        Self { id, state }
    }

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Releases this label's registry slot.
    pub fn dispose(self, registry: &mut ShapeRegistry) -> Result<(), SceneError> {
        registry.remove(self.id)
    }

    /// Always [`SceneError::NotSupported`].
    pub fn contains(&self, _x: f32, _y: f32) -> Result<bool, SceneError> {
        Err(not_supported(ShapeKind::Text, "contains"))
    }

    fn update(&mut self, f: impl FnOnce(&mut TextState)) {
        let mut state = self.state.borrow_mut();
        f(&mut state);
        state.recompute_anchor();
    }

    pub fn content(&self) -> String {
        self.state.borrow().content.clone()
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        self.update(|s| s.content = content);
    }

    pub fn center_x(&self) -> f32 {
        self.state.borrow().center.x
    }

    pub fn set_center_x(&mut self, center_x: f32) {
        self.update(|s| s.center.x = center_x);
    }

    pub fn center_y(&self) -> f32 {
        self.state.borrow().center.y
    }

    pub fn set_center_y(&mut self, center_y: f32) {
        self.update(|s| s.center.y = center_y);
    }

    pub fn size(&self) -> f32 {
        self.state.borrow().size
    }

    pub fn set_size(&mut self, size: f32) {
        self.update(|s| s.size = size);
    }

    /// Measured width of the current content.
    pub fn width(&self) -> f32 {
        self.state.borrow().width()
    }

    /// Baseline offset below the center: a quarter of the font size.
    pub fn height(&self) -> f32 {
        self.state.borrow().size / 4.0
    }

    /// Baseline start point handed to the surface.
    pub fn anchor(&self) -> Vec2 {
        self.state.borrow().anchor
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

impl Drawable for Text {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        self.state.borrow().draw_cmd()
    }
}
