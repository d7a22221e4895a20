//! Affine textured triangle rasterization.
//!
//! Classic two-half scanline walk: vertices are sorted by y, the triangle is
//! split at the middle vertex, and every scanline interpolates one endpoint
//! along the long edge and the other along the active short edge. Texture
//! coordinates interpolate linearly in screen space (no perspective divide).

use crate::buffer::PixelBuffer;
use crate::math::vector2::Vector2;

use super::sampler::{sample_bilinear, sample_nearest};

/// Draw a triangle textured with the declared region of `texture`.
///
/// `use_bilinear` selects the sampler. Degenerate (zero-height) triangles
/// return silently; every pixel is bounds-checked and blended.
pub fn draw_triangle_textured(
    fb: &mut PixelBuffer,
    vertices: &[Vector2; 3],
    uvs: &[Vector2; 3],
    texture: &PixelBuffer,
    tex_w: usize,
    tex_h: usize,
    use_bilinear: bool,
) {
    let mut corners = [
        (vertices[0], uvs[0]),
        (vertices[1], uvs[1]),
        (vertices[2], uvs[2]),
    ];
    corners.sort_by(|a, b| a.0.y.partial_cmp(&b.0.y).unwrap_or(std::cmp::Ordering::Equal));
    let (v0, uv0) = corners[0];
    let (v1, uv1) = corners[1];
    let (v2, uv2) = corners[2];

    let total_height = v2.y - v0.y;
    let rows = total_height as i32;
    if rows <= 0 {
        return;
    }

    let width = fb.width() as i32;
    let height = fb.height() as i32;

    for i in 0..rows {
        let fi = i as f64;
        let second_half = fi > v1.y - v0.y || v1.y == v0.y;
        let segment_height = if second_half {
            v2.y - v1.y
        } else {
            v1.y - v0.y
        };
        if segment_height == 0.0 {
            continue;
        }

        let alpha = fi / total_height;
        let beta = (fi - if second_half { v1.y - v0.y } else { 0.0 }) / segment_height;

        let mut a = v0.lerp(v2, alpha);
        let mut ua = uv0.lerp(uv2, alpha);
        let (mut b, mut ub) = if second_half {
            (v1.lerp(v2, beta), uv1.lerp(uv2, beta))
        } else {
            (v0.lerp(v1, beta), uv0.lerp(uv1, beta))
        };

        if a.x > b.x {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut ua, &mut ub);
        }

        let y = v0.y as i32 + i;
        if y < 0 || y >= height {
            continue;
        }

        let run = b.x - a.x;
        for x in (a.x as i32)..(b.x as i32) {
            if x < 0 || x >= width {
                continue;
            }
            let t = if run != 0.0 {
                (x as f64 - a.x) / run
            } else {
                0.0
            };
            let uv = ua.lerp(ub, t);
            let texel = if use_bilinear {
                sample_bilinear(texture, tex_w, tex_h, uv.x, uv.y)
            } else {
                sample_nearest(texture, tex_w, tex_h, uv.x, uv.y)
            };
            fb.blend(x, y, texel);
        }
    }
}
