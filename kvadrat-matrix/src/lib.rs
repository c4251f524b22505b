//! Kvadrat Matrix - Square integer matrix values
//!
//! Provides a fixed-size, square, integer-valued matrix type with:
//! - Construction (random fill, explicit grids)
//! - Arithmetic (add, mul, transpose)
//! - Ordering by aggregate cell sum (compare, gt, lt, ge, le)
//! - Elementwise equality with a consistent hash
//! - Recursive cofactor-expansion determinant (exact, arbitrary precision)
//! - Inversion attempt (fails on zero determinant)
//! - Scalar-sum and truthiness conversions, plain-text rendering
//!
//! Every operation returns a new matrix; instances are never mutated
//! after construction.

mod cmp;
mod construct;
mod ops;
mod props;
mod types;

pub use types::Matrix;

pub use kvadrat_core::{Cell, MatrixError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.cell_sum(), 10);
        assert!(m.any_nonzero());
    }
}
