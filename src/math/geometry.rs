//! Polygon and segment predicates shared by the rasterizer and its callers.

use super::vector2::Vector2;

/// Two edge directions closer than this are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Edges shorter than this contribute no offset direction.
const DEGENERATE_EDGE_EPSILON: f64 = 1e-6;

/// Even-odd point-in-polygon test, casting a ray along +x.
///
/// Boundary behavior follows the crossing predicate exactly; callers that
/// need closed boundaries should offset the polygon instead.
pub fn point_in_polygon(px: f64, py: f64, vertices: &[Vector2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = vertices[i];
        let pj = vertices[j];
        if ((pi.y > py) != (pj.y > py))
            && (px < (pj.x - pi.x) * (py - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Intersection point of segments `a1..a2` and `b1..b2`, or `None` when the
/// segments are parallel or the crossing lies outside either segment.
pub fn segment_intersection(
    a1: Vector2,
    a2: Vector2,
    b1: Vector2,
    b2: Vector2,
) -> Option<Vector2> {
    let d1 = a2 - a1;
    let d2 = b2 - b1;

    let denom = d1.cross(d2);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let d3 = b1 - a1;
    let t = d3.cross(d2) / denom;
    let u = d3.cross(d1) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + d1 * t)
    } else {
        None
    }
}

/// Offset every vertex of a polygon outward by `margin`.
///
/// Each vertex moves to the intersection of its two adjacent edges offset
/// along their `(-dy, dx)` normals. Near-parallel neighbors fall back to a
/// straight normal offset; a zero-length edge emits the original vertex.
pub fn polygon_offset(vertices: &[Vector2], margin: f64) -> Vec<Vector2> {
    let n = vertices.len();
    let mut out = Vec::with_capacity(n);
    if n < 3 {
        out.extend_from_slice(vertices);
        return out;
    }

    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let cur = vertices[i];
        let next = vertices[(i + 1) % n];

        let e1 = cur - prev;
        let e2 = next - cur;
        if e1.length() < DEGENERATE_EDGE_EPSILON || e2.length() < DEGENERATE_EDGE_EPSILON {
            out.push(cur);
            continue;
        }

        let n1 = Vector2::new(-e1.y, e1.x).normalized() * margin;
        let n2 = Vector2::new(-e2.y, e2.x).normalized() * margin;

        // The two adjacent edges, each pushed out along its own normal.
        let a = prev + n1;
        let b = cur + n2;

        let denom = e1.cross(e2);
        if denom.abs() < PARALLEL_EPSILON {
            out.push(cur + n1);
        } else {
            let t = (b - a).cross(e2) / denom;
            out.push(a + e1 * t);
        }
    }
    out
}
