//! 2x3 affine transform stored as two basis columns plus an origin.

use std::ops::Mul;

use crate::error::RasterError;

use super::vector2::Vector2;

/// Affine transform `[x.x y.x origin.x ; x.y y.y origin.y]`. Applying it to
/// a point computes `x * v.x + y * v.y + origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub x: Vector2,
    pub y: Vector2,
    pub origin: Vector2,
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D {
        x: Vector2 { x: 1.0, y: 0.0 },
        y: Vector2 { x: 0.0, y: 1.0 },
        origin: Vector2 { x: 0.0, y: 0.0 },
    };

    /// Rotation by `rotation` radians followed by a translation to `origin`.
    pub fn from_rotation(rotation: f64, origin: Vector2) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self {
            x: Vector2::new(cos, sin),
            y: Vector2::new(-sin, cos),
            origin,
        }
    }

    pub const fn from_basis(x: Vector2, y: Vector2, origin: Vector2) -> Self {
        Self { x, y, origin }
    }

    /// Transform a point.
    #[inline]
    pub fn xform(&self, v: Vector2) -> Vector2 {
        self.x * v.x + self.y * v.y + self.origin
    }

    /// Transform a direction, ignoring the origin.
    #[inline]
    pub fn basis_xform(&self, v: Vector2) -> Vector2 {
        self.x * v.x + self.y * v.y
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.x.x * self.y.y - self.x.y * self.y.x
    }

    /// Affine inverse. Fails on a singular basis.
    pub fn inverse(&self) -> Result<Transform2D, RasterError> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(RasterError::SingularMatrix);
        }
        let idet = 1.0 / det;
        let x = Vector2::new(self.y.y * idet, -self.x.y * idet);
        let y = Vector2::new(-self.y.x * idet, self.x.x * idet);
        let inv = Transform2D::from_basis(x, y, Vector2::ZERO);
        Ok(Transform2D::from_basis(
            x,
            y,
            -inv.basis_xform(self.origin),
        ))
    }

    /// Copy with the origin moved by `offset`.
    pub fn translated(&self, offset: Vector2) -> Self {
        Transform2D::from_basis(self.x, self.y, self.origin + offset)
    }

    /// Copy scaled component-wise, origin included.
    pub fn scaled(&self, scale: Vector2) -> Self {
        Transform2D::from_basis(self.x * scale, self.y * scale, self.origin * scale)
    }

    /// Copy rotated by `angle` radians about the global origin.
    pub fn rotated(&self, angle: f64) -> Self {
        Transform2D::from_rotation(angle, Vector2::ZERO) * *self
    }

    pub fn rotation(&self) -> f64 {
        self.x.y.atan2(self.x.x)
    }

    pub fn scale(&self) -> Vector2 {
        Vector2::new(self.x.length(), self.y.length())
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Composition: the result applies `rhs` first, then `self`.
impl Mul for Transform2D {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Transform2D::from_basis(
            self.basis_xform(rhs.x),
            self.basis_xform(rhs.y),
            self.xform(rhs.origin),
        )
    }
}

impl Mul<Vector2> for Transform2D {
    type Output = Vector2;
    #[inline]
    fn mul(self, v: Vector2) -> Vector2 {
        self.xform(v)
    }
}
