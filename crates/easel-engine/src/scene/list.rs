use crate::coords::Vec2;
use crate::paint::{Border, Color};

use super::cmd::{CircleCmd, LineCmd, PolygonCmd, TextCmd};
use super::{DrawCmd, Surface};

/// Recorded draw stream for a frame.
///
/// A [`Surface`] that keeps every request in submission order instead of
/// rasterizing it. Used by headless drivers and tests, and as a hand-off
/// point to an external renderer.
///
/// Performance characteristics:
/// - each draw request is an O(1) push
/// - `clear()` keeps allocated capacity for reuse
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    background: Option<Color>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns recorded commands in submission (paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Background set by the last [`Surface::clear`], if any.
    #[inline]
    pub fn background(&self) -> Option<&Color> {
        self.background.as_ref()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

impl Surface for DrawList {
    fn clear(&mut self, background: &Color) {
        self.items.clear();
        self.background = Some(background.clone());
    }

    fn draw_polygon(&mut self, points: &[Vec2], border: &Border, fill: &Color) {
        self.push(DrawCmd::Polygon(PolygonCmd {
            points: points.to_vec(),
            border: border.clone(),
            fill: fill.clone(),
        }));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, border: &Border, fill: &Color) {
        self.push(DrawCmd::Circle(CircleCmd {
            center,
            radius,
            border: border.clone(),
            fill: fill.clone(),
        }));
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, width: f32, color: &Color) {
        self.push(DrawCmd::Line(LineCmd { start, end, width, color: color.clone() }));
    }

    fn draw_text(&mut self, text: &str, anchor: Vec2, size: f32, color: &Color) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.to_owned(),
            anchor,
            size,
            color: color.clone(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_requests_in_order() {
        let mut list = DrawList::new();
        list.draw_line(Vec2::zero(), Vec2::new(1.0, 1.0), 3.0, &Color::black());
        list.draw_circle(Vec2::new(2.0, 2.0), 1.0, &Border::new(1.0, Color::black()), &Color::white());

        assert_eq!(list.len(), 2);
        assert!(matches!(list.items()[0], DrawCmd::Line(_)));
        assert!(matches!(list.items()[1], DrawCmd::Circle(_)));
    }

    #[test]
    fn clear_resets_items_and_records_background() {
        let mut list = DrawList::new();
        list.draw_text("hi", Vec2::zero(), 12.0, &Color::black());
        list.clear(&Color::white());

        assert!(list.is_empty());
        assert_eq!(list.background(), Some(&Color::white()));
    }

    #[test]
    fn submit_replays_a_command_onto_another_surface() {
        let cmd = DrawCmd::Polygon(PolygonCmd {
            points: vec![Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            border: Border::new(2.0, Color::transparent()),
            fill: Color::black(),
        });
        let mut list = DrawList::new();
        cmd.submit(&mut list);
        assert_eq!(list.items(), &[cmd]);
    }
}
