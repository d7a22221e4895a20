//! Bresenham line scan conversion.

use crate::buffer::PixelBuffer;

/// Draw a line with Bresenham's algorithm, stepping along the major axis.
/// Every pixel is bounds-checked and blended.
pub fn draw_line(fb: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut x = x0;
    let mut y = y0;

    if dx >= dy {
        let mut d = 2 * dy - dx;
        for _ in 0..=dx {
            fb.blend(x, y, color);
            if d > 0 {
                y += sy;
                d -= 2 * dx;
            }
            d += 2 * dy;
            x += sx;
        }
    } else {
        let mut d = 2 * dx - dy;
        for _ in 0..=dy {
            fb.blend(x, y, color);
            if d > 0 {
                x += sx;
                d -= 2 * dy;
            }
            d += 2 * dx;
            y += sy;
        }
    }
}
