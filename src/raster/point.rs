//! Single-pixel primitives.

use crate::buffer::PixelBuffer;
use crate::math::vector2::Vector2;

/// Blend one pixel into the buffer. Out-of-bounds coordinates are dropped.
#[inline]
pub fn draw_point(fb: &mut PixelBuffer, x: i32, y: i32, color: u32) {
    fb.blend(x, y, color);
}

/// Blend a batch of points, truncating each to pixel coordinates.
pub fn draw_points(fb: &mut PixelBuffer, points: &[Vector2], color: u32) {
    for p in points {
        fb.blend(p.x as i32, p.y as i32, color);
    }
}
