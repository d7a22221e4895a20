//! CPU software rasterization core for a 2D engine.
//!
//! Takes geometric primitives (points, lines, rectangles, circles,
//! triangles, polygons, textured polygons) and writes RGBA32 pixels into a
//! caller-owned [`PixelBuffer`] with source-over compositing. Scan
//! conversion is integer Bresenham for lines and circles and edge-table
//! scanlines for polygons; clipping is Cohen-Sutherland for segments and
//! Sutherland-Hodgman (with texture-coordinate carry) for polygons; texture
//! sampling is nearest or bilinear with repeat wrapping. The `math` module
//! supplies the 2D vector algebra, affine transforms, and homography
//! fitting the rasterizer is built on.
//!
//! Everything is single-threaded and synchronous: no call suspends, no
//! state persists between calls, and all scratch is call-local. Rendering
//! is best-effort: degenerate geometry draws nothing rather than failing,
//! and only contract violations (singular matrix inversion, mismatched
//! batch shapes) surface as [`RasterError`].

pub mod buffer;
pub mod color;
pub mod error;
pub mod math;
pub mod raster;

pub use buffer::PixelBuffer;
pub use color::{blend_colors, pack_rgba, unpack_rgba};
pub use error::RasterError;
pub use math::{Rect2, Transform2D, Vector2};
pub use raster::SoftwareRasterizer;
