//! Midpoint circle scan conversion.
//!
//! Integer decision variable `d = 3 - 2r`, walking one octant and mirroring
//! into the other seven. The filled variant emits four horizontal spans per
//! step; the outline variant emits eight symmetric pixels.

use crate::buffer::PixelBuffer;

/// Fill a circle with horizontal spans. Spans are clipped to the buffer and
/// blended; overlapping spans near the axes blend more than once with
/// translucent colors, matching the span-per-step emission order.
pub fn draw_circle_filled(fb: &mut PixelBuffer, cx: i32, cy: i32, r: i32, color: u32) {
    if r < 0 {
        return;
    }
    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while x <= y {
        fb.hline_blend(cx - x, cx + x, cy + y, color);
        fb.hline_blend(cx - x, cx + x, cy - y, color);
        fb.hline_blend(cx - y, cx + y, cy + x, color);
        fb.hline_blend(cx - y, cx + y, cy - x, color);

        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}

/// Outline a circle, blending eight mirrored pixels per step.
pub fn draw_circle_outline(fb: &mut PixelBuffer, cx: i32, cy: i32, r: i32, color: u32) {
    if r < 0 {
        return;
    }
    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while x <= y {
        fb.blend(cx + x, cy + y, color);
        fb.blend(cx - x, cy + y, color);
        fb.blend(cx + x, cy - y, color);
        fb.blend(cx - x, cy - y, color);
        fb.blend(cx + y, cy + x, color);
        fb.blend(cx - y, cy + x, color);
        fb.blend(cx + y, cy - x, color);
        fb.blend(cx - y, cy - x, color);

        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}
