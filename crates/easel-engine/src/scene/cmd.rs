use crate::coords::Vec2;
use crate::paint::{Border, Color};

use super::Surface;

/// Closed polygon draw payload. Rectangles are drawn through this too.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub border: Border,
    pub fill: Color,
}

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub border: Border,
    pub fill: Color,
}

/// Line segment draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub color: Color,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Baseline start point in canvas pixels.
    pub anchor: Vec2,
    /// Font size in canvas pixels.
    pub size: f32,
    pub color: Color,
}

/// Surface-agnostic draw request produced by a primitive.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and a matching [`Surface`] method
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
    Circle(CircleCmd),
    Line(LineCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Forwards this request to the matching [`Surface`] method.
    pub fn submit(&self, surface: &mut dyn Surface) {
        match self {
            DrawCmd::Polygon(c) => surface.draw_polygon(&c.points, &c.border, &c.fill),
            DrawCmd::Circle(c) => surface.draw_circle(c.center, c.radius, &c.border, &c.fill),
            DrawCmd::Line(c) => surface.draw_line(c.start, c.end, c.width, &c.color),
            DrawCmd::Text(c) => surface.draw_text(&c.text, c.anchor, c.size, &c.color),
        }
    }
}
