//! Presentation color values.
//!
//! Every channel is clamped into its valid range on construction; out of
//! range input is never an error. Colors render as CSS color strings, which
//! is what drawing surfaces consume.

use std::borrow::Cow;
use std::fmt;

/// Truncates `value` toward zero and clamps it to `[0, 255]`.
///
/// NaN maps to `0`.
#[inline]
pub fn clamp_8bit(value: f32) -> u8 {
    // `as` truncates toward zero and saturates; NaN becomes 0.
    (value as i32).clamp(0, 255) as u8
}

/// Clamps `value` to `[0.0, 1.0]`. NaN maps to `0.0`.
#[inline]
pub fn clamp_decimal(value: f32) -> f32 {
    value.max(0.0).min(1.0)
}

/// Clamps `value` to `[0, 100]`. NaN maps to `0`.
#[inline]
pub fn clamp_percent(value: f32) -> f32 {
    value.max(0.0).min(100.0)
}

/// Clamps `value` to `[0, 360]`. NaN maps to `0`.
#[inline]
pub fn clamp_degrees(value: f32) -> f32 {
    value.max(0.0).min(360.0)
}

/// Opaque color in the RGB color space.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r: clamp_8bit(r), g: clamp_8bit(g), b: clamp_8bit(b) }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// RGB color with straight alpha in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r: clamp_8bit(r), g: clamp_8bit(g), b: clamp_8bit(b), a: clamp_decimal(a) }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Color in the HSL color space.
///
/// `h` is in degrees `[0, 360]`, `s` and `l` are percentages `[0, 100]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    #[inline]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h: clamp_degrees(h), s: clamp_percent(s), l: clamp_percent(l) }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// HSL color with straight alpha in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    #[inline]
    pub fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self {
            h: clamp_degrees(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
            a: clamp_decimal(a),
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

/// Any color a primitive can be filled or stroked with.
///
/// `Named` carries a CSS color keyword (e.g. `"black"`) verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Named(Cow<'static, str>),
    Rgb(Rgb),
    Rgba(Rgba),
    Hsl(Hsl),
    Hsla(Hsla),
}

impl Color {
    /// Fully transparent white. Stands in wherever no color was given.
    #[inline]
    pub fn transparent() -> Self {
        Color::Rgba(Rgba { r: 255, g: 255, b: 255, a: 0.0 })
    }

    #[inline]
    pub fn black() -> Self {
        Color::named("black")
    }

    #[inline]
    pub fn white() -> Self {
        Color::named("white")
    }

    #[inline]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Color::Named(name.into())
    }

    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color::Rgb(Rgb::new(r, g, b))
    }

    #[inline]
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color::Rgba(Rgba::new(r, g, b, a))
    }

    #[inline]
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        Color::Hsl(Hsl::new(h, s, l))
    }

    #[inline]
    pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla(Hsla::new(h, s, l, a))
    }

    /// Maps `None` to [`Color::transparent`].
    #[inline]
    pub fn or_transparent(color: Option<Color>) -> Self {
        color.unwrap_or_else(Color::transparent)
    }

    /// Returns `true` when the color carries an explicit zero alpha.
    ///
    /// Named colors are treated as opaque.
    pub fn is_transparent(&self) -> bool {
        match self {
            Color::Rgba(c) => c.a <= 0.0,
            Color::Hsla(c) => c.a <= 0.0,
            Color::Named(name) => name.eq_ignore_ascii_case("transparent"),
            Color::Rgb(_) | Color::Hsl(_) => false,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(c) => c.fmt(f),
            Color::Rgba(c) => c.fmt(f),
            Color::Hsl(c) => c.fmt(f),
            Color::Hsla(c) => c.fmt(f),
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgba(c)
    }
}

impl From<Hsl> for Color {
    fn from(c: Hsl) -> Self {
        Color::Hsl(c)
    }
}

impl From<Hsla> for Color {
    fn from(c: Hsla) -> Self {
        Color::Hsla(c)
    }
}

impl From<&'static str> for Color {
    fn from(name: &'static str) -> Self {
        Color::named(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── clamps ────────────────────────────────────────────────────────────

    #[test]
    fn clamp_8bit_bounds() {
        assert_eq!(clamp_8bit(-5.0), 0);
        assert_eq!(clamp_8bit(300.0), 255);
        assert_eq!(clamp_8bit(127.9), 127);
        assert_eq!(clamp_8bit(f32::NAN), 0);
    }

    #[test]
    fn clamp_decimal_bounds() {
        assert_eq!(clamp_decimal(1.5), 1.0);
        assert_eq!(clamp_decimal(-0.2), 0.0);
        assert_eq!(clamp_decimal(0.25), 0.25);
    }

    #[test]
    fn clamp_percent_and_degrees() {
        assert_eq!(clamp_percent(120.0), 100.0);
        assert_eq!(clamp_percent(-1.0), 0.0);
        assert_eq!(clamp_degrees(400.0), 360.0);
        assert_eq!(clamp_degrees(-30.0), 0.0);
        assert_eq!(clamp_degrees(180.0), 180.0);
    }

    // ── value types ───────────────────────────────────────────────────────

    #[test]
    fn rgb_clamps_on_construction() {
        assert_eq!(Rgb::new(-10.0, 128.0, 999.0), Rgb { r: 0, g: 128, b: 255 });
    }

    #[test]
    fn hsla_clamps_every_channel() {
        let c = Hsla::new(720.0, 150.0, -5.0, 2.0);
        assert_eq!(c, Hsla { h: 360.0, s: 100.0, l: 0.0, a: 1.0 });
    }

    // ── css rendering ─────────────────────────────────────────────────────

    #[test]
    fn renders_css_strings() {
        assert_eq!(Color::rgb(255.0, 0.0, 10.0).to_string(), "rgb(255, 0, 10)");
        assert_eq!(Color::rgba(1.0, 2.0, 3.0, 0.5).to_string(), "rgba(1, 2, 3, 0.5)");
        assert_eq!(Color::hsl(120.0, 50.0, 25.0).to_string(), "hsl(120, 50%, 25%)");
        assert_eq!(Color::hsla(10.0, 20.0, 30.0, 0.5).to_string(), "hsla(10, 20%, 30%, 0.5)");
        assert_eq!(Color::named("teal").to_string(), "teal");
    }

    #[test]
    fn transparent_is_zero_alpha_white() {
        let t = Color::transparent();
        assert_eq!(t.to_string(), "rgba(255, 255, 255, 0)");
        assert!(t.is_transparent());
        assert!(!Color::black().is_transparent());
    }

    #[test]
    fn none_maps_to_transparent() {
        assert_eq!(Color::or_transparent(None), Color::transparent());
        assert_eq!(Color::or_transparent(Some(Color::white())), Color::white());
    }
}
