use super::Vec2;

/// Axis-aligned bounding box in canvas pixels (top-left origin, +Y down).
///
/// Unlike a layout rect, bounds are closed on every side: a point lying
/// exactly on `max` is inside.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Running min/max over `points`. Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds::new(*first, *first);
        for p in rest {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Closed containment: `[min, max]` on both axes.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Shifts both corners by `delta`.
    #[inline]
    pub fn translate(self, delta: Vec2) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    // ── from_points ───────────────────────────────────────────────────────

    #[test]
    fn from_points_empty_is_none() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn from_points_tracks_min_max() {
        let b = Bounds::from_points(&[v(3.0, -1.0), v(-2.0, 4.0), v(5.0, 0.0)]).unwrap();
        assert_eq!(b.min, v(-2.0, -1.0));
        assert_eq!(b.max, v(5.0, 4.0));
        assert_eq!(b.width(), 7.0);
        assert_eq!(b.height(), 5.0);
    }

    #[test]
    fn from_points_handles_far_off_canvas_values() {
        let b = Bounds::from_points(&[v(900.0, 900.0), v(1200.0, 1000.0), v(1000.0, 1100.0)]).unwrap();
        assert_eq!(b.min, v(900.0, 900.0));
        assert_eq!(b.max, v(1200.0, 1100.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_is_closed_on_every_side() {
        let b = Bounds::new(v(0.0, 0.0), v(10.0, 10.0));
        assert!(b.contains(v(0.0, 0.0)));
        assert!(b.contains(v(10.0, 10.0)));
        assert!(b.contains(v(10.0, 0.0)));
        assert!(!b.contains(v(10.5, 5.0)));
        assert!(!b.contains(v(5.0, -0.5)));
    }

    #[test]
    fn translate_moves_both_corners() {
        let b = Bounds::new(v(0.0, 0.0), v(2.0, 3.0)).translate(v(5.0, -1.0));
        assert_eq!(b, Bounds::new(v(5.0, -1.0), v(7.0, 2.0)));
    }
}
