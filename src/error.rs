//! Error taxonomy for the rasterization core.
//!
//! Only programmer bugs surface as errors; geometry pathology (degenerate
//! primitives, out-of-range coordinates, empty clip results) is dropped
//! silently so a bad vertex can never take down a frame.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    /// An argument violated the function contract (mismatched slice lengths,
    /// zero divisor on a checked division).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A matrix with zero determinant was asked for its inverse.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
}
