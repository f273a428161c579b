use super::Shape;

/// Top-most visible shape containing `(x, y)`.
///
/// "Top-most" is the highest slot index, i.e. the one drawn last. Shapes
/// without a containment capability (lines, text) are never picked.
pub fn pick<'a, I>(shapes: I, x: f32, y: f32) -> Option<&'a Shape>
where
    I: IntoIterator<Item = &'a Shape>,
{
    shapes
        .into_iter()
        .filter(|shape| shape.is_visible())
        .filter(|shape| shape.as_hittable().is_some_and(|h| h.contains(x, y)))
        .max_by_key(|shape| shape.id().index())
}
