//! Point/ring helpers used by polygon containment.
//!
//! A ring is an ordered vertex slice whose last vertex connects back to the
//! first. All functions are pure.

use super::Vec2;

/// Arithmetic mean of `points`. Returns `None` for an empty slice.
pub fn centroid(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let mut sum = Vec2::zero();
    for p in points {
        sum += *p;
    }
    Some(sum / points.len() as f32)
}

/// Whether a ray cast from `p` towards +X crosses the edge `a`–`b`.
///
/// Tie-break rules (kept bit-for-bit stable for hit-testing):
/// - `p.y` strictly outside the edge's y span: no crossing.
/// - vertical edge: crossing iff the edge's x is `>= p.x`. A point lying on a
///   vertical edge therefore counts it, which is not the usual half-open
///   convention.
/// - horizontal edge: never a crossing.
/// - otherwise: crossing iff the edge meets the line `y = p.y` at `x >= p.x`.
pub fn ray_crossing(a: Vec2, b: Vec2, p: Vec2) -> bool {
    if p.y < a.y.min(b.y) || p.y > a.y.max(b.y) {
        return false;
    }

    let rise = a.y - b.y;
    let run = a.x - b.x;

    if run == 0.0 {
        return a.x >= p.x;
    }
    if rise == 0.0 {
        return false;
    }

    let m = rise / run;
    let solved_x = (p.y - a.y) / m + a.x;
    solved_x >= p.x
}

/// Even-odd (parity) containment test over a closed ring.
///
/// Edges are visited as `(points[i], points[i - 1])` with wrap-around, so the
/// first edge pairs the first and last vertices. Correct for simple
/// polygons, convex or concave. Rings with fewer than three vertices contain
/// nothing.
pub fn ring_contains(points: &[Vec2], p: Vec2) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut hits = 0usize;
    let mut prev = points[n - 1];
    for &cur in points {
        if ray_crossing(cur, prev, p) {
            hits += 1;
        }
        prev = cur;
    }

    hits % 2 == 1
}
