//! Axis-aligned rectangle described by position and size.

use serde::{Deserialize, Serialize};

use super::vector2::Vector2;

/// Position/size rectangle with semi-open containment: a point on the left
/// or top edge is inside, a point on the right or bottom edge is not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect2 {
    pub position: Vector2,
    pub size: Vector2,
}

impl Rect2 {
    #[inline]
    pub const fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    #[inline]
    pub fn from_components(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(Vector2::new(x, y), Vector2::new(w, h))
    }

    /// The corner opposite `position`.
    #[inline]
    pub fn end(self) -> Vector2 {
        self.position + self.size
    }

    /// Semi-open containment test.
    #[inline]
    pub fn has_point(self, point: Vector2) -> bool {
        point.x >= self.position.x
            && point.x < self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y < self.position.y + self.size.y
    }
}
