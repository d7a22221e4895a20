//! 2D linear algebra and geometry primitives consumed by the rasterizer.

pub mod geometry;
pub mod homography;
pub mod rect2;
pub mod transform2d;
pub mod vector2;

pub use geometry::{point_in_polygon, polygon_offset, segment_intersection};
pub use homography::{apply_homography, apply_homography_batch, compute_homography, Homography};
pub use rect2::Rect2;
pub use transform2d::Transform2D;
pub use vector2::{Vector2, CMP_EPSILON};
