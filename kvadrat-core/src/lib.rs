//! Kvadrat Core - Fundamental types
//!
//! This crate provides the core types used throughout Kvadrat:
//! - `Cell`: The signed integer cell type of every matrix
//! - `MatrixError`: Recoverable errors raised by matrix operations

mod error;

pub use error::MatrixError;

/// The signed integer type stored in every matrix cell.
pub type Cell = i64;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Cell, MatrixError};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_value_like() {
        let a = MatrixError::dimension_mismatch(2, 3);
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_dimension() {
        let err = MatrixError::InvalidDimension(0);
        assert_eq!(format!("{}", err), "invalid dimension: size must be at least 1, got 0");
    }
}
