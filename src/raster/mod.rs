//! Primitive rasterizers and the pipeline that ties them together.
//!
//! The free functions in the submodules draw straight into a
//! [`PixelBuffer`] with per-pixel bounds checks. [`SoftwareRasterizer`]
//! layers a clip rectangle on top and routes every primitive through
//! clipping before scan conversion.

pub mod circle;
pub mod clipper;
pub mod line;
pub mod point;
pub mod polygon;
pub mod rect;
pub mod sampler;
pub mod triangle;

pub use circle::{draw_circle_filled, draw_circle_outline};
pub use clipper::{clip_line, clip_polygon};
pub use line::draw_line;
pub use point::{draw_point, draw_points};
pub use polygon::{draw_polygon_filled, draw_polygon_outline, draw_polygon_textured};
pub use rect::{draw_rect_outline, fill_rect};
pub use sampler::{sample_bilinear, sample_nearest};
pub use triangle::draw_triangle_textured;

use crate::buffer::PixelBuffer;
use crate::math::rect2::Rect2;
use crate::math::vector2::Vector2;

/// High-level 2D drawing interface over a caller-owned framebuffer.
///
/// Holds only the clip rectangle; every call takes the target buffer so the
/// caller keeps ownership of the pixels. The clip rectangle defaults to the
/// full buffer and is re-intersected with the buffer bounds on every call.
#[derive(Debug, Clone, Default)]
pub struct SoftwareRasterizer {
    clip: Option<Rect2>,
}

impl SoftwareRasterizer {
    pub fn new() -> Self {
        Self { clip: None }
    }

    /// Restrict drawing to a window. The window is clamped to the buffer at
    /// draw time.
    pub fn set_clip_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.clip = Some(Rect2::from_components(x, y, w, h));
    }

    /// Remove the clip window, restoring the full buffer.
    pub fn clear_clip_rect(&mut self) {
        self.clip = None;
    }

    /// Current clip window as `(min_x, min_y, max_x, max_y)`, clamped to the
    /// buffer.
    fn clip_bounds(&self, fb: &PixelBuffer) -> (f64, f64, f64, f64) {
        let w = fb.width() as f64;
        let h = fb.height() as f64;
        match self.clip {
            Some(r) => (
                r.position.x.max(0.0),
                r.position.y.max(0.0),
                (r.position.x + r.size.x).min(w),
                (r.position.y + r.size.y).min(h),
            ),
            None => (0.0, 0.0, w, h),
        }
    }

    /// Store a color into every pixel.
    pub fn clear(&self, fb: &mut PixelBuffer, color: u32) {
        fb.clear(color);
    }

    /// Plot a single point, rejected against the clip window first.
    pub fn draw_point(&self, fb: &mut PixelBuffer, pos: Vector2, color: u32) {
        let (min_x, min_y, max_x, max_y) = self.clip_bounds(fb);
        if pos.x < min_x || pos.x >= max_x || pos.y < min_y || pos.y >= max_y {
            return;
        }
        point::draw_point(fb, pos.x as i32, pos.y as i32, color);
    }

    /// Plot a batch of points with per-pixel bounds checks.
    pub fn draw_points(&self, fb: &mut PixelBuffer, points: &[Vector2], color: u32) {
        point::draw_points(fb, points, color);
    }

    /// Draw a line. Width above one pixel expands to polyline geometry;
    /// otherwise the segment is clipped against the window and scan
    /// converted.
    pub fn draw_line(
        &self,
        fb: &mut PixelBuffer,
        from: Vector2,
        to: Vector2,
        color: u32,
        width: f64,
    ) {
        if width > 1.0 {
            self.draw_polyline(fb, &[from, to], color, width);
            return;
        }

        let (min_x, min_y, max_x, max_y) = self.clip_bounds(fb);
        let Some((x1, y1, x2, y2)) =
            clipper::clip_line(from.x, from.y, to.x, to.y, min_x, min_y, max_x, max_y)
        else {
            return;
        };
        line::draw_line(fb, x1 as i32, y1 as i32, x2 as i32, y2 as i32, color);
    }

    /// Draw a connected series of segments with thickness.
    ///
    /// Thick polylines expand each segment into a quad along its orthogonal
    /// normal, with filled-circle joints at interior points and round caps
    /// at both ends.
    pub fn draw_polyline(
        &self,
        fb: &mut PixelBuffer,
        points: &[Vector2],
        color: u32,
        width: f64,
    ) {
        if points.len() < 2 {
            return;
        }

        if width <= 1.0 {
            for pair in points.windows(2) {
                self.draw_line(fb, pair[0], pair[1], color, 1.0);
            }
            return;
        }

        let half_width = width / 2.0;
        for (i, pair) in points.windows(2).enumerate() {
            let (p1, p2) = (pair[0], pair[1]);
            if p1 == p2 {
                continue;
            }

            let diff = p2 - p1;
            let length = diff.length();
            if length == 0.0 {
                continue;
            }
            let normal = Vector2::new(-diff.y, diff.x) / length * half_width;

            let quad = [p1 + normal, p1 - normal, p2 - normal, p2 + normal];
            self.draw_polygon(fb, &quad, color, true);

            // Joint at the shared vertex; the final point gets a cap
            // instead.
            if i < points.len() - 2 {
                self.draw_circle(fb, p2, half_width, color, true);
            }
        }

        self.draw_circle(fb, points[0], half_width, color, true);
        self.draw_circle(fb, points[points.len() - 1], half_width, color, true);
    }

    /// Draw a rectangle, filled or outlined with the given thickness.
    pub fn draw_rect(
        &self,
        fb: &mut PixelBuffer,
        pos: Vector2,
        size: Vector2,
        color: u32,
        filled: bool,
        thickness: i32,
    ) {
        if filled {
            rect::fill_rect(
                fb,
                pos.x as i32,
                pos.y as i32,
                size.x as i32,
                size.y as i32,
                color,
            );
        } else {
            rect::draw_rect_outline(
                fb,
                pos.x as i32,
                pos.y as i32,
                size.x as i32,
                size.y as i32,
                color,
                thickness,
            );
        }
    }

    /// Draw a circle, trivially rejected when it cannot touch the clip
    /// window.
    pub fn draw_circle(
        &self,
        fb: &mut PixelBuffer,
        center: Vector2,
        radius: f64,
        color: u32,
        filled: bool,
    ) {
        let (min_x, min_y, max_x, max_y) = self.clip_bounds(fb);
        if center.x + radius < min_x
            || center.x - radius > max_x
            || center.y + radius < min_y
            || center.y - radius > max_y
        {
            return;
        }

        if filled {
            circle::draw_circle_filled(fb, center.x as i32, center.y as i32, radius as i32, color);
        } else {
            circle::draw_circle_outline(fb, center.x as i32, center.y as i32, radius as i32, color);
        }
    }

    /// Draw an arbitrary polygon, clipped against the window first.
    pub fn draw_polygon(
        &self,
        fb: &mut PixelBuffer,
        points: &[Vector2],
        color: u32,
        filled: bool,
    ) {
        if points.len() < 3 {
            return;
        }

        let (min_x, min_y, max_x, max_y) = self.clip_bounds(fb);
        let (clipped, _) = clipper::clip_polygon(points, None, min_x, min_y, max_x, max_y);
        if clipped.len() < 3 {
            return;
        }

        if filled {
            polygon::draw_polygon_filled(fb, &clipped, color);
        } else {
            polygon::draw_polygon_outline(fb, &clipped, color);
        }
    }

    /// Draw a solid triangle, rejected early when its bounding box misses
    /// the clip window.
    pub fn draw_triangle(
        &self,
        fb: &mut PixelBuffer,
        v1: Vector2,
        v2: Vector2,
        v3: Vector2,
        color: u32,
    ) {
        let (min_x, min_y, max_x, max_y) = self.clip_bounds(fb);
        let bb_min_x = v1.x.min(v2.x).min(v3.x);
        let bb_max_x = v1.x.max(v2.x).max(v3.x);
        let bb_min_y = v1.y.min(v2.y).min(v3.y);
        let bb_max_y = v1.y.max(v2.y).max(v3.y);
        if bb_max_x < min_x || bb_min_x > max_x || bb_max_y < min_y || bb_min_y > max_y {
            return;
        }

        self.draw_polygon(fb, &[v1, v2, v3], color, true);
    }

    /// Draw a textured polygon, carrying texture coordinates through the
    /// clip so the mapping stays continuous at the window edges.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_textured_polygon(
        &self,
        fb: &mut PixelBuffer,
        points: &[Vector2],
        uvs: &[Vector2],
        texture: &PixelBuffer,
        tex_w: usize,
        tex_h: usize,
        modulate: u32,
    ) {
        if points.len() < 3 || uvs.len() != points.len() {
            return;
        }

        let (min_x, min_y, max_x, max_y) = self.clip_bounds(fb);
        let (clipped_verts, clipped_uvs) =
            clipper::clip_polygon(points, Some(uvs), min_x, min_y, max_x, max_y);
        if clipped_verts.len() < 3 {
            return;
        }

        polygon::draw_polygon_textured(
            fb,
            &clipped_verts,
            &clipped_uvs,
            texture,
            tex_w,
            tex_h,
            modulate,
        );
    }

    /// Draw a textured triangle, rejected early when its bounding box
    /// misses the clip window. `use_bilinear` selects the sampler.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_textured_triangle(
        &self,
        fb: &mut PixelBuffer,
        vertices: &[Vector2; 3],
        uvs: &[Vector2; 3],
        texture: &PixelBuffer,
        tex_w: usize,
        tex_h: usize,
        use_bilinear: bool,
    ) {
        let (min_x, min_y, max_x, max_y) = self.clip_bounds(fb);
        let bb_min_x = vertices[0].x.min(vertices[1].x).min(vertices[2].x);
        let bb_max_x = vertices[0].x.max(vertices[1].x).max(vertices[2].x);
        let bb_min_y = vertices[0].y.min(vertices[1].y).min(vertices[2].y);
        let bb_max_y = vertices[0].y.max(vertices[1].y).max(vertices[2].y);
        if bb_max_x < min_x || bb_min_x > max_x || bb_max_y < min_y || bb_min_y > max_y {
            return;
        }

        triangle::draw_triangle_textured(fb, vertices, uvs, texture, tex_w, tex_h, use_bilinear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_rect_limits_fill() {
        let mut fb = PixelBuffer::new(10, 10);
        let mut raster = SoftwareRasterizer::new();
        raster.set_clip_rect(2.0, 2.0, 4.0, 4.0);

        let poly = [
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ];
        raster.draw_polygon(&mut fb, &poly, 0xFFFF_FFFF, true);

        assert_eq!(fb.get(3, 3), Some(0xFFFF_FFFF));
        assert_eq!(fb.get(1, 1), Some(0));
        assert_eq!(fb.get(7, 7), Some(0));
    }

    #[test]
    fn test_clear_clip_rect_restores_full_buffer() {
        let mut fb = PixelBuffer::new(6, 6);
        let mut raster = SoftwareRasterizer::new();
        raster.set_clip_rect(0.0, 0.0, 1.0, 1.0);
        raster.clear_clip_rect();
        let poly = [
            Vector2::new(0.0, 0.0),
            Vector2::new(6.0, 0.0),
            Vector2::new(6.0, 6.0),
            Vector2::new(0.0, 6.0),
        ];
        raster.draw_polygon(&mut fb, &poly, 0xFF12_3456, true);
        assert_eq!(fb.get(5, 4), Some(0xFF12_3456));
    }

    #[test]
    fn test_draw_point_respects_clip_window() {
        let mut fb = PixelBuffer::new(8, 8);
        let mut raster = SoftwareRasterizer::new();
        raster.set_clip_rect(2.0, 2.0, 3.0, 3.0);
        raster.draw_point(&mut fb, Vector2::new(1.0, 1.0), 0xFFFF_FFFF);
        raster.draw_point(&mut fb, Vector2::new(3.0, 3.0), 0xFFFF_FFFF);
        assert_eq!(fb.get(1, 1), Some(0));
        assert_eq!(fb.get(3, 3), Some(0xFFFF_FFFF));
    }

    #[test]
    fn test_draw_line_clipped_to_window() {
        let mut fb = PixelBuffer::new(10, 10);
        let mut raster = SoftwareRasterizer::new();
        raster.set_clip_rect(0.0, 2.0, 10.0, 5.0);
        raster.draw_line(
            &mut fb,
            Vector2::new(4.0, -3.0),
            Vector2::new(4.0, 13.0),
            0xFFFF_FFFF,
            1.0,
        );
        for y in 0..10 {
            let lit = fb.get(4, y) != Some(0);
            assert_eq!(lit, (2..=7).contains(&y), "row {y}");
        }
    }

    #[test]
    fn test_thick_line_covers_width() {
        let mut fb = PixelBuffer::new(20, 20);
        let raster = SoftwareRasterizer::new();
        raster.draw_line(
            &mut fb,
            Vector2::new(2.0, 10.0),
            Vector2::new(17.0, 10.0),
            0xFFFF_FFFF,
            5.0,
        );
        // A horizontal stroke of width 5 around row 10 covers rows 7..=11
        // at mid-span.
        for y in 7..=11 {
            assert_eq!(fb.get(10, y), Some(0xFFFF_FFFF), "row {y}");
        }
        assert_eq!(fb.get(10, 5), Some(0));
        assert_eq!(fb.get(10, 15), Some(0));
    }

    #[test]
    fn test_polyline_degenerate_segment_skipped() {
        let mut fb = PixelBuffer::new(12, 12);
        let raster = SoftwareRasterizer::new();
        let points = [
            Vector2::new(2.0, 2.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(9.0, 2.0),
        ];
        raster.draw_polyline(&mut fb, &points, 0xFFFF_FFFF, 3.0);
        assert_eq!(fb.get(5, 2), Some(0xFFFF_FFFF));
    }

    #[test]
    fn test_circle_outside_clip_window_rejected() {
        let mut fb = PixelBuffer::new(20, 20);
        let mut raster = SoftwareRasterizer::new();
        raster.set_clip_rect(0.0, 0.0, 5.0, 5.0);
        raster.draw_circle(&mut fb, Vector2::new(15.0, 15.0), 3.0, 0xFFFF_FFFF, true);
        assert!(fb.pixels().iter().all(|&p| p == 0));
        // Touching the window is enough to draw.
        raster.draw_circle(&mut fb, Vector2::new(6.0, 3.0), 2.0, 0xFFFF_FFFF, true);
        assert_ne!(fb.get(4, 3), Some(0));
    }

    #[test]
    fn test_textured_polygon_uv_continuity_across_clip() {
        // Drawing a quad clipped by the window must sample the same texels
        // as drawing it unclipped into a larger buffer.
        let mut tex = PixelBuffer::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                tex.set(x, y, crate::color::pack_rgba((x * 60) as u8, (y * 60) as u8, 0, 255));
            }
        }
        let poly = [
            Vector2::new(-4.0, -4.0),
            Vector2::new(12.0, -4.0),
            Vector2::new(12.0, 12.0),
            Vector2::new(-4.0, 12.0),
        ];
        let uvs = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ];

        let raster = SoftwareRasterizer::new();
        let mut clipped_fb = PixelBuffer::new(8, 8);
        raster.draw_textured_polygon(
            &mut clipped_fb,
            &poly,
            &uvs,
            &tex,
            4,
            4,
            crate::color::WHITE,
        );

        let mut big_fb = PixelBuffer::new(16, 16);
        polygon::draw_polygon_textured(
            &mut big_fb,
            &[
                Vector2::new(-4.0, -4.0),
                Vector2::new(12.0, -4.0),
                Vector2::new(12.0, 12.0),
                Vector2::new(-4.0, 12.0),
            ],
            &uvs,
            &tex,
            4,
            4,
            crate::color::WHITE,
        );

        for y in 1..7i32 {
            for x in 1..7i32 {
                assert_eq!(
                    clipped_fb.get(x, y),
                    big_fb.get(x, y),
                    "pixel ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_textured_triangle_routes_through_bbox_reject() {
        let mut fb = PixelBuffer::new(8, 8);
        let mut raster = SoftwareRasterizer::new();
        raster.set_clip_rect(0.0, 0.0, 4.0, 4.0);
        let tex = {
            let mut t = PixelBuffer::new(1, 1);
            t.clear(0xFFFF_FFFF);
            t
        };
        raster.draw_textured_triangle(
            &mut fb,
            &[
                Vector2::new(20.0, 20.0),
                Vector2::new(30.0, 20.0),
                Vector2::new(25.0, 30.0),
            ],
            &[Vector2::ZERO; 3],
            &tex,
            1,
            1,
            false,
        );
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_draw_triangle_solid() {
        let mut fb = PixelBuffer::new(12, 12);
        let raster = SoftwareRasterizer::new();
        raster.draw_triangle(
            &mut fb,
            Vector2::new(1.0, 1.0),
            Vector2::new(10.0, 1.0),
            Vector2::new(5.0, 10.0),
            0xFFAB_CDEF,
        );
        assert_eq!(fb.get(5, 4), Some(0xFFAB_CDEF));
        assert_eq!(fb.get(0, 11), Some(0));
    }
}
