//! Axis-aligned rectangle fill and outline.

use crate::buffer::PixelBuffer;

/// Fill a rectangle, clipping it to the buffer first.
///
/// A fully opaque color is stored row by row without reading the
/// destination; translucent colors blend; alpha 0 is a no-op.
pub fn fill_rect(fb: &mut PixelBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    if w <= 0 || h <= 0 {
        return;
    }
    let alpha = color >> 24;
    if alpha == 0 {
        return;
    }

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(fb.width() as i32);
    let y1 = (y + h).min(fb.height() as i32);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    if alpha == 255 {
        for row in y0..y1 {
            fb.hline(x0, x1 - 1, row, color);
        }
    } else {
        for row in y0..y1 {
            fb.hline_blend(x0, x1 - 1, row, color);
        }
    }
}

/// Outline a rectangle as four filled strips of the given thickness.
///
/// Thickness at or beyond half the smaller dimension makes the strips
/// overlap and over-fill; callers own that tradeoff.
pub fn draw_rect_outline(
    fb: &mut PixelBuffer,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: u32,
    thickness: i32,
) {
    if w <= 0 || h <= 0 || thickness <= 0 {
        return;
    }
    let t = thickness;
    fill_rect(fb, x, y, w, t, color);
    fill_rect(fb, x, y + h - t, w, t, color);
    fill_rect(fb, x, y + t, t, h - 2 * t, color);
    fill_rect(fb, x + w - t, y + t, t, h - 2 * t, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_fill_over_empty() {
        let mut fb = PixelBuffer::new(4, 4);
        fill_rect(&mut fb, 1, 1, 2, 2, 0xFFFF_0000);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if (1..3).contains(&x) && (1..3).contains(&y) {
                    0xFFFF_0000
                } else {
                    0
                };
                assert_eq!(fb.get(x, y), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_half_alpha_fill_blends() {
        let mut fb = PixelBuffer::new(1, 1);
        fb.set(0, 0, 0xFF00_00FF);
        fill_rect(&mut fb, 0, 0, 1, 1, 0x80FF_0000);
        assert_eq!(fb.get(0, 0), Some(0xFE7F_007E));
    }

    #[test]
    fn test_zero_alpha_fill_is_noop() {
        let mut fb = PixelBuffer::new(2, 2);
        fb.clear(0xFF12_3456);
        fill_rect(&mut fb, 0, 0, 2, 2, 0x00FF_FFFF);
        assert!(fb.pixels().iter().all(|&p| p == 0xFF12_3456));
    }

    #[test]
    fn test_fill_clips_negative_origin_and_overrun() {
        let mut fb = PixelBuffer::new(4, 4);
        fill_rect(&mut fb, -2, -2, 10, 3, 0xFFFF_FFFF);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if y < 1 { 0xFFFF_FFFF } else { 0 };
                assert_eq!(fb.get(x, y), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_degenerate_sizes_draw_nothing() {
        let mut fb = PixelBuffer::new(4, 4);
        fill_rect(&mut fb, 1, 1, 0, 3, 0xFFFF_FFFF);
        fill_rect(&mut fb, 1, 1, 3, -1, 0xFFFF_FFFF);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_outline_leaves_interior_untouched() {
        let mut fb = PixelBuffer::new(8, 8);
        draw_rect_outline(&mut fb, 1, 1, 6, 6, 0xFFFF_FFFF, 1);
        // Border ring lit, interior and exterior empty.
        for y in 0..8 {
            for x in 0..8 {
                let on_ring = (1..7).contains(&x)
                    && (1..7).contains(&y)
                    && (x == 1 || x == 6 || y == 1 || y == 6);
                let expected = if on_ring { 0xFFFF_FFFF } else { 0 };
                assert_eq!(fb.get(x, y), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_outline_thickness_two() {
        let mut fb = PixelBuffer::new(10, 10);
        draw_rect_outline(&mut fb, 1, 1, 8, 8, 0xFFFF_FFFF, 2);
        assert_eq!(fb.get(1, 1), Some(0xFFFF_FFFF));
        assert_eq!(fb.get(2, 2), Some(0xFFFF_FFFF));
        assert_eq!(fb.get(3, 3), Some(0));
        assert_eq!(fb.get(5, 5), Some(0));
        assert_eq!(fb.get(7, 7), Some(0xFFFF_FFFF));
    }
}
