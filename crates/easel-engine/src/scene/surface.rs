use crate::coords::Vec2;
use crate::paint::{Border, Color};

/// Drawing target handed to registry callbacks once per frame.
///
/// Implementations rasterize, record, or forward requests; the scene never
/// reads anything back.
pub trait Surface {
    /// Starts a new frame with the given background.
    fn clear(&mut self, background: &Color) {
        let _ = background;
    }

    /// Closed polygon through `points`, stroked with `border`.
    fn draw_polygon(&mut self, points: &[Vec2], border: &Border, fill: &Color);

    fn draw_circle(&mut self, center: Vec2, radius: f32, border: &Border, fill: &Color);

    fn draw_line(&mut self, start: Vec2, end: Vec2, width: f32, color: &Color);

    /// Text whose baseline starts at `anchor`.
    fn draw_text(&mut self, text: &str, anchor: Vec2, size: f32, color: &Color);
}
