use thiserror::Error;

use super::TextMeasure;

/// Error returned by [`FontMeasure::from_bytes`].
#[derive(Debug, Clone, Error)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// [`TextMeasure`] backed by a single TrueType/OpenType font.
///
/// Widths are the pen advance after the last glyph, so trailing spaces
/// count.
pub struct FontMeasure {
    font: fontdue::Font,
}

impl FontMeasure {
    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        log::debug!("loaded font ({} bytes)", bytes.len());
        Ok(Self { font })
    }
}

impl TextMeasure for FontMeasure {
    fn measure_width(&self, text: &str, size: f32) -> f32 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        if text.is_empty() || size <= 0.0 {
            return 0.0;
        }

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &TextStyle::new(text, size, 0));

        layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = self.font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
    }
}

impl std::fmt::Debug for FontMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMeasure").finish_non_exhaustive()
    }
}
