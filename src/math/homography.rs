//! Projective mapping between two quads.
//!
//! Fits the 3x3 matrix taking four source points to four destination points
//! by solving the standard 8x8 linear system, then applies it with a
//! projective divide.

use crate::error::RasterError;

use super::vector2::Vector2;

/// Row-major 3x3 projective matrix, normalized so the bottom-right entry
/// is 1.
pub type Homography = [[f64; 3]; 3];

pub const IDENTITY: Homography = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Pivots smaller than this are treated as singular.
const PIVOT_EPSILON: f64 = 1e-9;

/// Fit the homography mapping `src[i]` onto `dst[i]`.
///
/// Each point pair contributes the two rows
/// `[x y 1 0 0 0 -x*u -y*u]` and `[0 0 0 x y 1 -x*v -y*v]` of an 8x8 system
/// solved by Gauss-Jordan elimination with partial pivoting. A near-singular
/// system (three collinear points, repeated points) is recoverable: the
/// function logs an error and returns the identity.
pub fn compute_homography(src: &[Vector2; 4], dst: &[Vector2; 4]) -> Homography {
    // Augmented [A | b], one solution column on the right.
    let mut m = [[0.0f64; 9]; 8];
    for i in 0..4 {
        let (x, y) = (src[i].x, src[i].y);
        let (u, v) = (dst[i].x, dst[i].y);
        m[2 * i] = [x, y, 1.0, 0.0, 0.0, 0.0, -x * u, -y * u, u];
        m[2 * i + 1] = [0.0, 0.0, 0.0, x, y, 1.0, -x * v, -y * v, v];
    }

    for col in 0..8 {
        let mut pivot_row = col;
        for row in col + 1..8 {
            if m[row][col].abs() > m[pivot_row][col].abs() {
                pivot_row = row;
            }
        }
        if m[pivot_row][col].abs() < PIVOT_EPSILON {
            log::error!(
                "compute_homography: near-singular system (pivot {:.3e} in column {col}), returning identity",
                m[pivot_row][col]
            );
            return IDENTITY;
        }
        m.swap(col, pivot_row);

        let pivot = m[col][col];
        for c in col..9 {
            m[col][c] /= pivot;
        }
        for row in 0..8 {
            if row == col {
                continue;
            }
            let factor = m[row][col];
            if factor != 0.0 {
                for c in col..9 {
                    m[row][c] -= factor * m[col][c];
                }
            }
        }
    }

    [
        [m[0][8], m[1][8], m[2][8]],
        [m[3][8], m[4][8], m[5][8]],
        [m[6][8], m[7][8], 1.0],
    ]
}

/// Apply a homography to a point. A vanishing denominator returns the input
/// unchanged.
#[inline]
pub fn apply_homography(h: &Homography, x: f64, y: f64) -> (f64, f64) {
    let denom = h[2][0] * x + h[2][1] * y + h[2][2];
    if denom.abs() < PIVOT_EPSILON {
        return (x, y);
    }
    (
        (h[0][0] * x + h[0][1] * y + h[0][2]) / denom,
        (h[1][0] * x + h[1][1] * y + h[1][2]) / denom,
    )
}

/// Apply a homography to a batch of points into a caller-allocated output
/// slice of the same length.
pub fn apply_homography_batch(
    h: &Homography,
    points: &[[f64; 2]],
    out: &mut [[f64; 2]],
) -> Result<(), RasterError> {
    if points.len() != out.len() {
        return Err(RasterError::InvalidArgument(
            "points and out must have matching lengths",
        ));
    }
    for (p, o) in points.iter().zip(out.iter_mut()) {
        let (x, y) = apply_homography(h, p[0], p[1]);
        *o = [x, y];
    }
    Ok(())
}
