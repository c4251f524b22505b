//! Error types for matrix operations
//!
//! Errors are values that surface immediately to the caller of the
//! failing operation. There is no retry and no partial result: every
//! failure is a terminal outcome of that single call.

use thiserror::Error;

/// Error type for matrix operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A binary operation was given operands of different size.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Inversion was attempted on a matrix with zero determinant.
    #[error("matrix is not invertible: determinant is zero")]
    NotInvertible,

    /// Construction was attempted with a non-positive size.
    #[error("invalid dimension: size must be at least 1, got {0}")]
    InvalidDimension(usize),

    /// A grid row's length disagrees with the derived matrix size.
    #[error("ragged grid: row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        got: usize,
        expected: usize,
    },
}

impl MatrixError {
    /// Size-mismatch error for a binary operation over `left` and `right`.
    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        MatrixError::DimensionMismatch { left, right }
    }
}
