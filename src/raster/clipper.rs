//! Segment and polygon clipping against an axis-aligned window.
//!
//! Segments go through Cohen-Sutherland outcodes; polygons go through
//! Sutherland-Hodgman with texture coordinates carried through every
//! boundary intersection so textured fills stay continuous after clipping.

use crate::math::vector2::Vector2;

/// Outcode bits: which half-planes a point violates.
pub const INSIDE: u8 = 0;
pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const TOP: u8 = 4;
pub const BOTTOM: u8 = 8;

/// Converges in four clips for finite input; the cap only guards NaN.
const MAX_CLIP_ITERATIONS: u32 = 16;

#[inline]
fn outcode(x: f64, y: f64, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> u8 {
    let mut code = INSIDE;
    if x < min_x {
        code |= LEFT;
    } else if x > max_x {
        code |= RIGHT;
    }
    if y < min_y {
        code |= TOP;
    } else if y > max_y {
        code |= BOTTOM;
    }
    code
}

/// Cohen-Sutherland segment clip. Returns the clipped endpoints, or `None`
/// when the segment lies entirely outside the window.
pub fn clip_line(
    mut x1: f64,
    mut y1: f64,
    mut x2: f64,
    mut y2: f64,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> Option<(f64, f64, f64, f64)> {
    let mut code1 = outcode(x1, y1, min_x, min_y, max_x, max_y);
    let mut code2 = outcode(x2, y2, min_x, min_y, max_x, max_y);

    for _ in 0..MAX_CLIP_ITERATIONS {
        if code1 | code2 == 0 {
            return Some((x1, y1, x2, y2));
        }
        if code1 & code2 != 0 {
            return None;
        }

        let code_out = if code1 != 0 { code1 } else { code2 };
        let (x, y);
        if code_out & TOP != 0 {
            x = x1 + (x2 - x1) * (min_y - y1) / (y2 - y1);
            y = min_y;
        } else if code_out & BOTTOM != 0 {
            x = x1 + (x2 - x1) * (max_y - y1) / (y2 - y1);
            y = max_y;
        } else if code_out & RIGHT != 0 {
            y = y1 + (y2 - y1) * (max_x - x1) / (x2 - x1);
            x = max_x;
        } else {
            y = y1 + (y2 - y1) * (min_x - x1) / (x2 - x1);
            x = min_x;
        }

        if code_out == code1 {
            x1 = x;
            y1 = y;
            code1 = outcode(x1, y1, min_x, min_y, max_x, max_y);
        } else {
            x2 = x;
            y2 = y;
            code2 = outcode(x2, y2, min_x, min_y, max_x, max_y);
        }
    }

    None
}

/// Polygon vertex with its texture coordinates, used only while clipping.
#[derive(Debug, Clone, Copy, Default)]
struct ClipVertex {
    x: f64,
    y: f64,
    u: f64,
    v: f64,
}

#[derive(Clone, Copy, PartialEq)]
enum Axis {
    X,
    Y,
}

impl ClipVertex {
    #[inline]
    fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Intersection of edge `p1..p2` with an axis-aligned boundary, lerping
/// position and texture coordinates together. A degenerate edge intersects
/// as `p1`.
#[inline]
fn intersect(p1: ClipVertex, p2: ClipVertex, boundary: f64, axis: Axis) -> ClipVertex {
    let span = p2.coord(axis) - p1.coord(axis);
    if span == 0.0 {
        return p1;
    }
    let t = (boundary - p1.coord(axis)) / span;
    ClipVertex {
        x: p1.x + (p2.x - p1.x) * t,
        y: p1.y + (p2.y - p1.y) * t,
        u: p1.u + (p2.u - p1.u) * t,
        v: p1.v + (p2.v - p1.v) * t,
    }
}

/// One Sutherland-Hodgman pass against a single boundary. `keep_below`
/// selects which side of the boundary survives.
fn clip_against(
    input: &[ClipVertex],
    output: &mut Vec<ClipVertex>,
    boundary: f64,
    axis: Axis,
    keep_below: bool,
) {
    output.clear();
    let n = input.len();
    for i in 0..n {
        let cur = input[i];
        let prev = input[(i + n - 1) % n];

        let inside = |p: &ClipVertex| {
            if keep_below {
                p.coord(axis) <= boundary
            } else {
                p.coord(axis) >= boundary
            }
        };

        match (inside(&prev), inside(&cur)) {
            (true, true) => output.push(cur),
            (true, false) => output.push(intersect(prev, cur, boundary, axis)),
            (false, true) => {
                output.push(intersect(prev, cur, boundary, axis));
                output.push(cur);
            }
            (false, false) => {}
        }
    }
}

/// Sutherland-Hodgman polygon clip with texture-coordinate carry.
///
/// Clips against the four window boundaries in turn. Returns the surviving
/// vertex loop and, when `uvs` was supplied, the matching interpolated
/// texture coordinates (empty otherwise). Fewer than three survivors clip
/// to nothing.
pub fn clip_polygon(
    points: &[Vector2],
    uvs: Option<&[Vector2]>,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> (Vec<Vector2>, Vec<Vector2>) {
    if points.len() < 3 {
        return (Vec::new(), Vec::new());
    }
    if let Some(uvs) = uvs {
        if uvs.len() != points.len() {
            return (Vec::new(), Vec::new());
        }
    }

    // Each boundary pass can at most double the vertex count against a
    // convex window; ping-pong between two buffers sized for that.
    let capacity = points.len() * 2 + 16;
    let mut front: Vec<ClipVertex> = Vec::with_capacity(capacity);
    let mut back: Vec<ClipVertex> = Vec::with_capacity(capacity);

    for (i, p) in points.iter().enumerate() {
        let uv = uvs.map_or(Vector2::ZERO, |uvs| uvs[i]);
        front.push(ClipVertex {
            x: p.x,
            y: p.y,
            u: uv.x,
            v: uv.y,
        });
    }

    let passes = [
        (min_x, Axis::X, false),
        (max_x, Axis::X, true),
        (min_y, Axis::Y, false),
        (max_y, Axis::Y, true),
    ];
    for (boundary, axis, keep_below) in passes {
        clip_against(&front, &mut back, boundary, axis, keep_below);
        std::mem::swap(&mut front, &mut back);
        if front.is_empty() {
            break;
        }
    }

    if front.len() < 3 {
        return (Vec::new(), Vec::new());
    }

    let out_points = front.iter().map(|p| Vector2::new(p.x, p.y)).collect();
    let out_uvs = if uvs.is_some() {
        front.iter().map(|p| Vector2::new(p.u, p.v)).collect()
    } else {
        Vec::new()
    };
    (out_points, out_uvs)
}
