/// Width of rendered text, supplied by whoever owns the fonts.
///
/// The scene only needs horizontal extent: text labels center themselves on
/// their x coordinate using this value.
pub trait TextMeasure {
    /// Width in canvas pixels of `text` rendered at `size`.
    fn measure_width(&self, text: &str, size: f32) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f32) -> f32,
{
    #[inline]
    fn measure_width(&self, text: &str, size: f32) -> f32 {
        self(text, size)
    }
}

/// Fixed advance per character, as a fraction of the font size.
///
/// Useful headless and in tests where no font file is available.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl MonospaceMeasure {
    #[inline]
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_scales_with_length_and_size() {
        let m = MonospaceMeasure::default();
        assert_eq!(m.measure_width("abcd", 10.0), 20.0);
        assert_eq!(m.measure_width("", 10.0), 0.0);
        assert_eq!(m.measure_width("éé", 4.0), 4.0);
    }

    #[test]
    fn closures_measure() {
        let m = |text: &str, size: f32| text.len() as f32 + size;
        assert_eq!(m.measure_width("abc", 1.0), 4.0);
    }
}
