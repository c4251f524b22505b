//! Derived quantities: determinant, aggregate sum, truthiness

use dashu_int::IBig;
use kvadrat_core::Cell;

use crate::types::Matrix;

impl Matrix {
    /// Determinant by recursive cofactor expansion along the first row.
    ///
    /// Computed exactly in arbitrary precision so large sizes never
    /// truncate.
    pub fn determinant(&self) -> IBig {
        match self.size {
            1 => IBig::from(self.cells[0][0]),
            2 => {
                IBig::from(self.cells[0][0]) * IBig::from(self.cells[1][1])
                    - IBig::from(self.cells[0][1]) * IBig::from(self.cells[1][0])
            }
            _ => {
                let mut det = IBig::ZERO;
                for j in 0..self.size {
                    let term = IBig::from(self.cells[0][j]) * self.minor(0, j).determinant();
                    if j % 2 == 0 {
                        det += term;
                    } else {
                        det -= term;
                    }
                }
                det
            }
        }
    }

    /// The minor: this matrix with one row and one column deleted.
    fn minor(&self, row: usize, col: usize) -> Matrix {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != row)
            .map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != col)
                    .map(|(_, &cell)| cell)
                    .collect()
            })
            .collect();

        Matrix::from_grid(cells)
    }

    /// Sum of all cells, the aggregate the relational comparisons order
    /// by.
    pub fn cell_sum(&self) -> Cell {
        self.cells.iter().flatten().sum()
    }

    /// True iff at least one cell is nonzero.
    pub fn any_nonzero(&self) -> bool {
        self.cells.iter().flatten().any(|&cell| cell != 0)
    }
}
