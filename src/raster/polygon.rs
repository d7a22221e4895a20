//! Even-odd scanline polygon fill, solid and textured, plus outlines.
//!
//! Scan conversion uses a flat edge pool: every non-horizontal edge becomes
//! one pool entry carrying its exclusive end row, current x, and per-row
//! slopes (position and, for textured fills, texture coordinates). The pool
//! is sorted by starting row and consumed by a sweep cursor; the active edge
//! table holds pool indices sorted by current x. All scratch lives for one
//! call.

use std::cmp::Ordering;

use crate::buffer::PixelBuffer;
use crate::color::{blend_colors, WHITE};
use crate::math::vector2::Vector2;

use super::line::draw_line;
use super::sampler::sample_nearest;

/// One polygon edge bound for the sweep. `y_max` is the first row the edge
/// no longer covers.
#[derive(Debug, Clone, Copy)]
struct Edge {
    y_start: i32,
    y_max: i32,
    x: f64,
    dx: f64,
    u: f64,
    du: f64,
    v: f64,
    dv: f64,
}

/// Build the edge pool for a vertex loop, sorted by starting row.
///
/// Horizontal edges (same truncated row at both ends) are skipped, as are
/// edges entirely outside `[0, height)`. Edges starting above row 0 are
/// advanced to row 0 so unclipped input stays correct. Returns `None` when
/// scratch allocation fails.
fn build_edge_pool(
    vertices: &[Vector2],
    uvs: Option<&[Vector2]>,
    height: i32,
) -> Option<Vec<Edge>> {
    let n = vertices.len();
    let mut pool: Vec<Edge> = Vec::new();
    if pool.try_reserve_exact(n).is_err() {
        return None;
    }

    for i in 0..n {
        let j = (i + 1) % n;
        let (mut p1, mut p2) = (vertices[i], vertices[j]);
        let (mut uv1, mut uv2) = match uvs {
            Some(uvs) => (uvs[i], uvs[j]),
            None => (Vector2::ZERO, Vector2::ZERO),
        };

        if p1.y as i32 == p2.y as i32 {
            continue;
        }
        if p1.y > p2.y {
            std::mem::swap(&mut p1, &mut p2);
            std::mem::swap(&mut uv1, &mut uv2);
        }

        let mut y_start = p1.y as i32;
        let y_max = p2.y as i32;
        if y_max <= 0 || y_start >= height {
            continue;
        }

        let dy = p2.y - p1.y;
        let dx = (p2.x - p1.x) / dy;
        let du = (uv2.x - uv1.x) / dy;
        let dv = (uv2.y - uv1.y) / dy;

        let mut x = p1.x;
        let mut u = uv1.x;
        let mut v = uv1.y;
        if y_start < 0 {
            let rows = (-y_start) as f64;
            x += dx * rows;
            u += du * rows;
            v += dv * rows;
            y_start = 0;
        }

        pool.push(Edge {
            y_start,
            y_max,
            x,
            dx,
            u,
            du,
            v,
            dv,
        });
    }

    pool.sort_unstable_by_key(|e| e.y_start);
    Some(pool)
}

/// Vertical scan range of a vertex loop, clamped to the buffer. `None` when
/// the polygon misses every row.
fn scan_range(vertices: &[Vector2], height: i32) -> Option<(i32, i32)> {
    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for v in vertices {
        y_min = y_min.min(v.y);
        y_max = y_max.max(v.y);
    }
    let start = (y_min as i32).max(0);
    let end = (y_max as i32).min(height - 1);
    if start > end {
        return None;
    }
    Some((start, end))
}

fn sort_active_by_x(active: &mut [usize], pool: &[Edge]) {
    active.sort_unstable_by(|&a, &b| {
        pool[a]
            .x
            .partial_cmp(&pool[b].x)
            .unwrap_or(Ordering::Equal)
    });
}

/// Fill a polygon with a solid color using even-odd scanline conversion.
/// Degenerate input (fewer than three vertices) draws nothing; scratch
/// allocation failure draws nothing rather than rendering partially.
pub fn draw_polygon_filled(fb: &mut PixelBuffer, vertices: &[Vector2], color: u32) {
    if vertices.len() < 3 {
        return;
    }
    let height = fb.height() as i32;
    let Some((y_start, y_end)) = scan_range(vertices, height) else {
        return;
    };
    let Some(mut pool) = build_edge_pool(vertices, None, height) else {
        return;
    };
    if pool.is_empty() {
        return;
    }

    let mut active: Vec<usize> = Vec::new();
    if active.try_reserve_exact(pool.len()).is_err() {
        return;
    }

    let mut cursor = 0;
    for y in y_start..=y_end {
        while cursor < pool.len() && pool[cursor].y_start <= y {
            active.push(cursor);
            cursor += 1;
        }
        active.retain(|&i| pool[i].y_max > y);
        sort_active_by_x(&mut active, &pool);

        for pair in active.chunks_exact(2) {
            let left = pool[pair[0]].x;
            let right = pool[pair[1]].x;
            fb.hline_blend(left as i32, right as i32, y, color);
        }

        for &i in &active {
            let e = &mut pool[i];
            e.x += e.dx;
        }
    }
}

/// Fill a polygon with a texture using the same scan conversion, walking
/// texture coordinates along each edge and across each span.
///
/// `modulate` tints every texel (texel blended over the modulate color)
/// unless it is opaque white. Sampling is nearest-neighbor.
pub fn draw_polygon_textured(
    fb: &mut PixelBuffer,
    vertices: &[Vector2],
    uvs: &[Vector2],
    texture: &PixelBuffer,
    tex_w: usize,
    tex_h: usize,
    modulate: u32,
) {
    if vertices.len() < 3 || uvs.len() != vertices.len() {
        return;
    }
    let height = fb.height() as i32;
    let Some((y_start, y_end)) = scan_range(vertices, height) else {
        return;
    };
    let Some(mut pool) = build_edge_pool(vertices, Some(uvs), height) else {
        return;
    };
    if pool.is_empty() {
        return;
    }

    let mut active: Vec<usize> = Vec::new();
    if active.try_reserve_exact(pool.len()).is_err() {
        return;
    }

    let mut cursor = 0;
    for y in y_start..=y_end {
        while cursor < pool.len() && pool[cursor].y_start <= y {
            active.push(cursor);
            cursor += 1;
        }
        active.retain(|&i| pool[i].y_max > y);
        sort_active_by_x(&mut active, &pool);

        for pair in active.chunks_exact(2) {
            let left = pool[pair[0]];
            let right = pool[pair[1]];
            textured_span(
                fb, y, left.x, right.x, left.u, left.v, right.u, right.v, texture, tex_w, tex_h,
                modulate,
            );
        }

        for &i in &active {
            let e = &mut pool[i];
            e.x += e.dx;
            e.u += e.du;
            e.v += e.dv;
        }
    }
}

/// Walk one textured span, interpolating texture coordinates per pixel.
#[allow(clippy::too_many_arguments)]
fn textured_span(
    fb: &mut PixelBuffer,
    y: i32,
    x_start: f64,
    x_end: f64,
    u_start: f64,
    v_start: f64,
    u_end: f64,
    v_end: f64,
    texture: &PixelBuffer,
    tex_w: usize,
    tex_h: usize,
    modulate: u32,
) {
    let span = x_end - x_start;
    let (du_dx, dv_dx) = if span != 0.0 {
        ((u_end - u_start) / span, (v_end - v_start) / span)
    } else {
        (0.0, 0.0)
    };

    let mut u = u_start;
    let mut v = v_start;
    let mut x0 = x_start as i32;
    if x_start < 0.0 {
        // Carry texture coordinates across the clipped-off left part.
        u += du_dx * (0.0 - x_start);
        v += dv_dx * (0.0 - x_start);
        x0 = 0;
    }
    let x1 = (x_end as i32).min(fb.width() as i32 - 1);

    for x in x0..=x1 {
        let texel = sample_nearest(texture, tex_w, tex_h, u, v);
        let src = if modulate != WHITE {
            blend_colors(texel, modulate)
        } else {
            texel
        };
        fb.blend(x, y, src);
        u += du_dx;
        v += dv_dx;
    }
}

/// Outline a polygon by tracing its closed edge loop with Bresenham lines.
pub fn draw_polygon_outline(fb: &mut PixelBuffer, vertices: &[Vector2], color: u32) {
    let n = vertices.len();
    if n < 3 {
        return;
    }
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        draw_line(fb, a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
    }
}
