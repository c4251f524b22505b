//! Matrix arithmetic and inversion

use dashu_int::IBig;
use kvadrat_core::{Cell, MatrixError};

use crate::types::Matrix;

/// Check that two matrices have the same size.
pub(crate) fn require_same_size(a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.size != b.size {
        return Err(MatrixError::dimension_mismatch(a.size, b.size));
    }
    Ok(())
}

impl Matrix {
    /// Cellwise sum of two same-size matrices.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        require_same_size(self, other)?;

        let cells = (0..self.size)
            .map(|i| {
                (0..self.size)
                    .map(|j| self.cells[i][j] + other.cells[i][j])
                    .collect()
            })
            .collect();

        Ok(Matrix::from_grid(cells))
    }

    /// Standard matrix product of two same-size matrices:
    /// `result[i][j] = sum over k of a[i][k] * b[k][j]`.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        require_same_size(self, other)?;

        let cells = (0..self.size)
            .map(|i| {
                (0..self.size)
                    .map(|j| {
                        (0..self.size)
                            .map(|k| self.cells[i][k] * other.cells[k][j])
                            .sum()
                    })
                    .collect()
            })
            .collect();

        Ok(Matrix::from_grid(cells))
    }

    /// Transpose: rows become columns, diagonal cells unchanged.
    pub fn transpose(&self) -> Matrix {
        let cells = (0..self.size)
            .map(|i| (0..self.size).map(|j| self.cells[j][i]).collect())
            .collect();

        Matrix::from_grid(cells)
    }

    /// Inversion attempt. Fails with `NotInvertible` when the
    /// determinant is zero.
    ///
    /// This reproduces the reference algorithm verbatim: the result is
    /// the transpose with every cell scaled by `(-1)` raised to the
    /// determinant's value. That is not the adjugate/determinant inverse
    /// of linear algebra; only the determinant's parity affects the
    /// output (odd negates, even leaves the transpose as-is). Preserved
    /// for behavioral compatibility.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant();
        if det == IBig::ZERO {
            return Err(MatrixError::NotInvertible);
        }

        // (-1)^det: the determinant's parity decides the sign.
        let odd = det % IBig::from(2) != IBig::ZERO;
        let sign: Cell = if odd { -1 } else { 1 };

        let transposed = self.transpose();
        let cells = transposed
            .cells
            .iter()
            .map(|row| row.iter().map(|&cell| sign * cell).collect())
            .collect();

        Ok(Matrix::from_grid(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn m(rows: Vec<Vec<Cell>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_add() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![10, 20], vec![30, 40]]);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum, m(vec![vec![11, 22], vec![33, 44]]));
    }

    #[test]
    fn test_add_is_commutative() {
        let a = Matrix::random(4, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = Matrix::random(4, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn test_add_size_mismatch() {
        let a = m(vec![vec![1]]);
        let b = m(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_mul() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![5, 6], vec![7, 8]]);
        // [1*5+2*7, 1*6+2*8; 3*5+4*7, 3*6+4*8]
        assert_eq!(a.mul(&b).unwrap(), m(vec![vec![19, 22], vec![43, 50]]));
    }

    #[test]
    fn test_mul_is_associative() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![0, 1], vec![5, 2]]);
        let c = m(vec![vec![7, 1], vec![2, 6]]);
        let left = a.mul(&b).unwrap().mul(&c).unwrap();
        let right = a.mul(&b.mul(&c).unwrap()).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_mul_size_mismatch() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![1]]);
        assert!(matches!(
            a.mul(&b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_transpose() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.transpose(), m(vec![vec![1, 3], vec![2, 4]]));
    }

    #[test]
    fn test_transpose_is_involution() {
        let a = Matrix::random(3, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_inverse_zero_determinant() {
        // det([[1,2],[2,4]]) = 0
        let a = m(vec![vec![1, 2], vec![2, 4]]);
        assert_eq!(a.inverse(), Err(MatrixError::NotInvertible));
    }

    #[test]
    fn test_inverse_even_determinant_is_plain_transpose() {
        // det([[1,2],[3,4]]) = -2, even: (-1)^det = 1
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.inverse().unwrap(), m(vec![vec![1, 3], vec![2, 4]]));
    }

    #[test]
    fn test_inverse_odd_determinant_negates_transpose() {
        // det([[1,2],[3,5]]) = -1, odd: (-1)^det = -1
        let a = m(vec![vec![1, 2], vec![3, 5]]);
        assert_eq!(a.inverse().unwrap(), m(vec![vec![-1, -3], vec![-2, -5]]));
    }

    #[test]
    fn test_inverse_is_deterministic() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.inverse().unwrap(), a.inverse().unwrap());
    }

    #[test]
    fn test_operations_do_not_mutate_operands() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![5, 6], vec![7, 8]]);
        let snapshot = a.clone();
        let _ = a.add(&b).unwrap();
        let _ = a.mul(&b).unwrap();
        let _ = a.transpose();
        let _ = a.inverse().unwrap();
        assert_eq!(a, snapshot);
    }
}
