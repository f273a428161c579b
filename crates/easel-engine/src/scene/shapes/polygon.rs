use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{centroid, ring_contains, Bounds, Vec2};
use crate::paint::{Color, Style};
use crate::scene::cmd::PolygonCmd;
use crate::scene::{DrawCmd, SceneError, ShapeId, ShapeRegistry};

use super::{register_shared, Drawable, Hittable};

const MIN_VERTICES: usize = 3;

#[derive(Debug)]
struct PolygonState {
    /// Closed ring; the last vertex connects back to the first.
    points: Vec<Vec2>,
    centroid: Vec2,
    bounds: Bounds,
    style: Style,
}

impl PolygonState {
    fn new(points: Vec<Vec2>, style: Style) -> Result<Self, SceneError> {
        let mut state = Self { points: Vec::new(), centroid: Vec2::zero(), bounds: Bounds::default(), style };
        state.set_points(points)?;
        Ok(state)
    }

    fn set_points(&mut self, points: Vec<Vec2>) -> Result<(), SceneError> {
        if points.len() < MIN_VERTICES {
            return Err(SceneError::InvalidGeometry { vertices: points.len() });
        }
        self.points = points;
        self.recompute_derived();
        Ok(())
    }

    fn recompute_derived(&mut self) {
        // `points` is never shorter than MIN_VERTICES here.
        self.centroid = centroid(&self.points).unwrap_or_default();
        self.bounds = Bounds::from_points(&self.points).unwrap_or_default();
    }

    /// Shifts every vertex so the centroid lands on `center`.
    ///
    /// The centroid is assigned rather than re-derived so repeated moves do
    /// not accumulate rounding drift.
    fn translate_to(&mut self, center: Vec2) {
        let delta = center - self.centroid;
        for p in &mut self.points {
            *p += delta;
        }
        self.bounds = self.bounds.translate(delta);
        self.centroid = center;
    }
}

impl Drawable for PolygonState {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        if !self.style.is_visible() {
            return None;
        }
        Some(DrawCmd::Polygon(PolygonCmd {
            points: self.points.clone(),
            border: self.style.stroke(),
            fill: self.style.fill().clone(),
        }))
    }
}

/// Simple polygon (convex or concave) over an implicitly closed ring.
///
/// Its movable "center" is the vertex centroid.
#[derive(Debug)]
pub struct Polygon {
    id: ShapeId,
    state: Rc<RefCell<PolygonState>>,
}

impl Polygon {
    /// Builds the polygon and registers its draw callback.
    ///
    /// Fails with [`SceneError::InvalidGeometry`] for fewer than three
    /// vertices; nothing is registered in that case.
    pub fn new(
        registry: &mut ShapeRegistry,
        points: impl IntoIterator<Item = Vec2>,
        style: Style,
    ) -> Result<Self, SceneError> {
        let state = Rc::new(RefCell::new(PolygonState::new(points.into_iter().collect(), style)?));
        let id = register_shared(registry, &state);
        log::debug!("polygon {id} with {} vertices", state.borrow().points.len());
        Ok(Self { id, state })
    }

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Releases this polygon's registry slot.
    pub fn dispose(self, registry: &mut ShapeRegistry) -> Result<(), SceneError> {
        registry.remove(self.id)
    }

    // ── geometry ──────────────────────────────────────────────────────────

    pub fn points(&self) -> Vec<Vec2> {
        self.state.borrow().points.clone()
    }

    /// Replaces the ring and recomputes centroid and bounds.
    ///
    /// On error the previous ring is kept.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = Vec2>) -> Result<(), SceneError> {
        self.state.borrow_mut().set_points(points.into_iter().collect())
    }

    pub fn center_x(&self) -> f32 {
        self.state.borrow().centroid.x
    }

    pub fn set_center_x(&mut self, center_x: f32) {
        let mut s = self.state.borrow_mut();
        let target = Vec2::new(center_x, s.centroid.y);
        s.translate_to(target);
    }

    pub fn center_y(&self) -> f32 {
        self.state.borrow().centroid.y
    }

    pub fn set_center_y(&mut self, center_y: f32) {
        let mut s = self.state.borrow_mut();
        let target = Vec2::new(s.centroid.x, center_y);
        s.translate_to(target);
    }

    pub fn center(&self) -> Vec2 {
        self.state.borrow().centroid
    }

    /// Moves the whole polygon by `delta`, preserving its shape.
    pub fn translate(&mut self, delta: Vec2) {
        let mut s = self.state.borrow_mut();
        let target = s.centroid + delta;
        s.translate_to(target);
    }

    pub fn bounds(&self) -> Bounds {
        self.state.borrow().bounds
    }

    // ── style ─────────────────────────────────────────────────────────────

    pub fn style(&self) -> Style {
        self.state.borrow().style.clone()
    }

    pub fn fill(&self) -> Color {
        self.state.borrow().style.fill().clone()
    }

    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.state.borrow_mut().style.set_fill(fill);
    }

    pub fn border(&self) -> Color {
        self.state.borrow().style.border().clone()
    }

    pub fn set_border(&mut self, border: Option<Color>) {
        self.state.borrow_mut().style.set_border(border);
    }

    pub fn border_width(&self) -> f32 {
        self.state.borrow().style.border_width()
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.state.borrow_mut().style.set_border_width(width);
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().style.is_visible()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().style.set_visible(visible);
    }
}

impl Drawable for Polygon {
    fn draw_cmd(&self) -> Option<DrawCmd> {
        self.state.borrow().draw_cmd()
    }
}

impl Hittable for Polygon {
    /// Bounding-box reject, then even-odd ray cast over the ring.
    ///
    /// Points on a vertical edge count as a crossing of that edge, so a
    /// point on the right side of an axis-aligned square is inside. This is
    /// not the half-open convention most geometry libraries use.
    fn contains(&self, x: f32, y: f32) -> bool {
        let s = self.state.borrow();
        let p = Vec2::new(x, y);
        if !s.bounds.contains(p) {
            return false;
        }
        ring_contains(&s.points, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawList;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn square(registry: &mut ShapeRegistry) -> Polygon {
        Polygon::new(registry, [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)], Style::default()).unwrap()
    }

    fn arrow(registry: &mut ShapeRegistry) -> Polygon {
        Polygon::new(
            registry,
            [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(5.0, 5.0), v(0.0, 10.0)],
            Style::default(),
        )
        .unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn fewer_than_three_vertices_is_invalid() {
        let mut registry = ShapeRegistry::new();
        let err = Polygon::new(&mut registry, [v(0.0, 0.0), v(1.0, 1.0)], Style::default()).unwrap_err();
        assert_eq!(err, SceneError::InvalidGeometry { vertices: 2 });
        assert!(registry.is_empty());
    }

    #[test]
    fn derived_centroid_and_bounds() {
        let mut registry = ShapeRegistry::new();
        let p = arrow(&mut registry);
        assert_eq!(p.center(), v(5.0, 5.0));
        assert_eq!(p.bounds(), Bounds::new(v(0.0, 0.0), v(10.0, 10.0)));
    }

    #[test]
    fn set_points_recomputes_and_rejects_short_rings() {
        let mut registry = ShapeRegistry::new();
        let mut p = square(&mut registry);

        p.set_points([v(0.0, 0.0), v(6.0, 0.0), v(0.0, 3.0)]).unwrap();
        assert_eq!(p.center(), v(2.0, 1.0));
        assert_eq!(p.bounds(), Bounds::new(v(0.0, 0.0), v(6.0, 3.0)));

        assert!(p.set_points([v(0.0, 0.0)]).is_err());
        assert_eq!(p.points().len(), 3);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn square_containment() {
        let mut registry = ShapeRegistry::new();
        let p = square(&mut registry);
        assert!(p.contains(5.0, 5.0));
        assert!(!p.contains(-1.0, 5.0));
        assert!(p.contains(10.0, 5.0));
        assert!(!p.contains(5.0, 11.0));
    }

    #[test]
    fn concave_notch_is_not_contained() {
        let mut registry = ShapeRegistry::new();
        let p = arrow(&mut registry);
        assert!(!p.contains(5.0, 8.0));
        assert!(p.contains(2.0, 3.0));
        assert!(p.contains(9.0, 8.0));
    }

    #[test]
    fn triangle_containment() {
        let mut registry = ShapeRegistry::new();
        let p = Polygon::new(&mut registry, [v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0)], Style::default()).unwrap();
        assert!(p.contains(2.0, 2.0));
        assert!(!p.contains(8.0, 8.0));
    }

    // ── translation ───────────────────────────────────────────────────────

    #[test]
    fn moving_center_shifts_every_vertex() {
        let mut registry = ShapeRegistry::new();
        let mut p = square(&mut registry);

        p.set_center_x(105.0);
        p.set_center_y(55.0);

        assert_eq!(p.center(), v(105.0, 55.0));
        assert_eq!(p.points(), vec![v(100.0, 50.0), v(110.0, 50.0), v(110.0, 60.0), v(100.0, 60.0)]);
        assert_eq!(p.bounds(), Bounds::new(v(100.0, 50.0), v(110.0, 60.0)));
        assert!(p.contains(105.0, 55.0));
        assert!(!p.contains(5.0, 5.0));
    }

    #[test]
    fn translate_round_trip_restores_vertices() {
        let mut registry = ShapeRegistry::new();
        let mut p = arrow(&mut registry);
        let original = p.points();

        p.translate(v(13.7, -4.2));
        p.translate(v(-13.7, 4.2));

        for (a, b) in p.points().iter().zip(&original) {
            assert!((a.x - b.x).abs() < 1e-4, "{a:?} vs {b:?}");
            assert!((a.y - b.y).abs() < 1e-4, "{a:?} vs {b:?}");
        }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn draws_ring_in_order() {
        let mut registry = ShapeRegistry::new();
        let mut p = square(&mut registry);
        p.set_center_x(0.0);

        let mut list = DrawList::new();
        registry.draw_all(&mut list);
        let DrawCmd::Polygon(cmd) = &list.items()[0] else {
            panic!("expected polygon, got {:?}", list.items()[0]);
        };
        assert_eq!(cmd.points, p.points());
    }
}
