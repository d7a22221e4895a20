//! Texture sampling with repeat wrapping.
//!
//! Textures are plain [`PixelBuffer`]s with an explicitly declared extent:
//! storage may be larger than `(tex_w, tex_h)` and the samplers only ever
//! address the declared region. UVs wrap into `[0, 1)` (repeat mode),
//! negatives included.

use crate::buffer::PixelBuffer;
use crate::color::{pack_rgba, unpack_rgba};

/// True modulo, wrapping negatives into `[0, m)`.
#[inline]
fn wrap(value: i64, m: i64) -> i32 {
    (((value % m) + m) % m) as i32
}

/// Nearest-neighbor sample at `(u, v)`.
pub fn sample_nearest(tex: &PixelBuffer, tex_w: usize, tex_h: usize, u: f64, v: f64) -> u32 {
    if tex_w == 0 || tex_h == 0 {
        return 0;
    }
    let u = u - u.floor();
    let v = v - v.floor();

    let x = ((u * tex_w as f64) as i64).clamp(0, tex_w as i64 - 1) as i32;
    let y = ((v * tex_h as f64) as i64).clamp(0, tex_h as i64 - 1) as i32;
    tex.get(x, y).unwrap_or(0)
}

/// Bilinear sample at `(u, v)` with texel centers at half-integer
/// coordinates. All four channels interpolate independently; alpha is
/// interpolated, not premultiplied.
pub fn sample_bilinear(tex: &PixelBuffer, tex_w: usize, tex_h: usize, u: f64, v: f64) -> u32 {
    if tex_w == 0 || tex_h == 0 {
        return 0;
    }
    let u = u - u.floor();
    let v = v - v.floor();

    let px = u * tex_w as f64 - 0.5;
    let py = v * tex_h as f64 - 0.5;
    let x0 = px.floor();
    let y0 = py.floor();
    let wx = px - x0;
    let wy = py - y0;

    let w = tex_w as i64;
    let h = tex_h as i64;
    let x0 = x0 as i64;
    let y0 = y0 as i64;
    let xa = wrap(x0, w);
    let xb = wrap(x0 + 1, w);
    let ya = wrap(y0, h);
    let yb = wrap(y0 + 1, h);

    let c00 = unpack_rgba(tex.get(xa, ya).unwrap_or(0));
    let c10 = unpack_rgba(tex.get(xb, ya).unwrap_or(0));
    let c01 = unpack_rgba(tex.get(xa, yb).unwrap_or(0));
    let c11 = unpack_rgba(tex.get(xb, yb).unwrap_or(0));

    let lerp2 = |a: u8, b: u8, c: u8, d: u8| -> u8 {
        let top = a as f64 + (b as f64 - a as f64) * wx;
        let bottom = c as f64 + (d as f64 - c as f64) * wx;
        (top + (bottom - top) * wy) as u8
    };

    pack_rgba(
        lerp2(c00.0, c10.0, c01.0, c11.0),
        lerp2(c00.1, c10.1, c01.1, c11.1),
        lerp2(c00.2, c10.2, c01.2, c11.2),
        lerp2(c00.3, c10.3, c01.3, c11.3),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 texture: red, green / blue, white, all opaque.
    fn quad_texture() -> PixelBuffer {
        let mut tex = PixelBuffer::new(2, 2);
        tex.set(0, 0, 0xFFFF_0000);
        tex.set(1, 0, 0xFF00_FF00);
        tex.set(0, 1, 0xFF00_00FF);
        tex.set(1, 1, 0xFFFF_FFFF);
        tex
    }

    #[test]
    fn test_nearest_picks_texel_cells() {
        let tex = quad_texture();
        assert_eq!(sample_nearest(&tex, 2, 2, 0.1, 0.1), 0xFFFF_0000);
        assert_eq!(sample_nearest(&tex, 2, 2, 0.9, 0.1), 0xFF00_FF00);
        assert_eq!(sample_nearest(&tex, 2, 2, 0.1, 0.9), 0xFF00_00FF);
        assert_eq!(sample_nearest(&tex, 2, 2, 0.9, 0.9), 0xFFFF_FFFF);
    }

    #[test]
    fn test_nearest_matches_floor_mod_formula() {
        let tex = quad_texture();
        for &(u, v) in &[(0.3, 0.6), (-0.3, 1.7), (2.25, -4.9), (0.999, 0.001)] {
            let wu = u - f64::floor(u);
            let wv = v - f64::floor(v);
            let x = (wu * 2.0).floor() as i32 % 2;
            let y = (wv * 2.0).floor() as i32 % 2;
            assert_eq!(
                sample_nearest(&tex, 2, 2, u, v),
                tex.get(x, y).unwrap(),
                "uv = ({u}, {v})"
            );
        }
    }

    #[test]
    fn test_nearest_respects_declared_extent() {
        // 4x4 storage declared as 2x2: only the top-left corner is
        // addressable.
        let mut tex = PixelBuffer::new(4, 4);
        tex.clear(0xFF11_1111);
        tex.set(3, 3, 0xFFAB_CDEF);
        assert_eq!(sample_nearest(&tex, 2, 2, 0.99, 0.99), 0xFF11_1111);
    }

    #[test]
    fn test_bilinear_at_texel_center_is_exact() {
        let tex = quad_texture();
        // (0.25, 0.25) is the center of texel (0,0) in a 2x2 texture.
        assert_eq!(sample_bilinear(&tex, 2, 2, 0.25, 0.25), 0xFFFF_0000);
    }

    #[test]
    fn test_bilinear_halfway_mixes_neighbors() {
        let mut tex = PixelBuffer::new(2, 1);
        tex.set(0, 0, pack_rgba(0, 0, 0, 255));
        tex.set(1, 0, pack_rgba(200, 100, 50, 255));
        // Halfway between the two texel centers on a 2x1 texture.
        let c = sample_bilinear(&tex, 2, 1, 0.5, 0.5);
        let (r, g, b, a) = unpack_rgba(c);
        assert_eq!((r, g, b, a), (100, 50, 25, 255));
    }

    #[test]
    fn test_bilinear_wraps_negative_uv() {
        let tex = quad_texture();
        // Repeat wrap: shifting by a whole tile changes nothing.
        assert_eq!(
            sample_bilinear(&tex, 2, 2, 0.3, 0.7),
            sample_bilinear(&tex, 2, 2, -1.7, 2.7)
        );
    }

    #[test]
    fn test_bilinear_interpolates_alpha() {
        let mut tex = PixelBuffer::new(2, 1);
        tex.set(0, 0, pack_rgba(255, 255, 255, 0));
        tex.set(1, 0, pack_rgba(255, 255, 255, 255));
        let (_, _, _, a) = unpack_rgba(sample_bilinear(&tex, 2, 1, 0.5, 0.5));
        assert_eq!(a, 127);
    }

    #[test]
    fn test_empty_extent_samples_transparent() {
        let tex = PixelBuffer::new(2, 2);
        assert_eq!(sample_nearest(&tex, 0, 2, 0.5, 0.5), 0);
        assert_eq!(sample_bilinear(&tex, 2, 0, 0.5, 0.5), 0);
    }
}
