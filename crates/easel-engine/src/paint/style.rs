use super::Color;

/// Stroke drawn along the outline of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Construction-time defaults for [`Style`].
///
/// Passed explicitly to whoever builds primitives; nothing reads a shared
/// default behind the caller's back.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefaults {
    pub fill: Option<Color>,
    pub border: Option<Color>,
    pub border_width: f32,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            fill: Some(Color::black()),
            border: None,
            border_width: 2.0,
        }
    }
}

impl StyleDefaults {
    /// A visible style built from these defaults.
    pub fn style(&self) -> Style {
        Style::new(self.fill.clone(), self.border.clone(), self.border_width)
    }
}

/// Fill, border and visibility of a primitive.
///
/// A missing fill or border is stored as [`Color::transparent`], so the draw
/// path never has to branch on absence.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    fill: Color,
    border: Color,
    border_width: f32,
    visible: bool,
}

impl Style {
    pub fn new(fill: Option<Color>, border: Option<Color>, border_width: f32) -> Self {
        Self {
            fill: Color::or_transparent(fill),
            border: Color::or_transparent(border),
            border_width,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<Option<Color>>) -> Self {
        self.set_fill(fill.into());
        self
    }

    #[must_use]
    pub fn with_border(mut self, border: impl Into<Option<Color>>) -> Self {
        self.set_border(border.into());
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    #[inline]
    pub fn fill(&self) -> &Color {
        &self.fill
    }

    #[inline]
    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.fill = Color::or_transparent(fill);
    }

    #[inline]
    pub fn border(&self) -> &Color {
        &self.border
    }

    #[inline]
    pub fn set_border(&mut self, border: Option<Color>) {
        self.border = Color::or_transparent(border);
    }

    #[inline]
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    #[inline]
    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = width;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Border stroke as consumed by draw commands.
    #[inline]
    pub fn stroke(&self) -> Border {
        Border::new(self.border_width, self.border.clone())
    }
}

impl Default for Style {
    fn default() -> Self {
        StyleDefaults::default().style()
    }
}
