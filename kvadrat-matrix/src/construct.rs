//! Matrix construction

use kvadrat_core::{Cell, MatrixError};
use rand::Rng;

use crate::types::Matrix;

/// Random cells are drawn uniformly from `[0, RANDOM_CELL_BOUND)`.
pub const RANDOM_CELL_BOUND: Cell = 10;

impl Matrix {
    /// Create a `size`x`size` matrix with every cell independently drawn
    /// uniformly from `[0, 10)`.
    ///
    /// The generator is injected so construction stays deterministic
    /// under a seeded `Rng`. Fails with `InvalidDimension` when
    /// `size < 1`.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, MatrixError> {
        if size < 1 {
            return Err(MatrixError::InvalidDimension(size));
        }

        let cells = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| rng.gen_range(0..RANDOM_CELL_BOUND))
                    .collect()
            })
            .collect();

        Ok(Self::from_grid(cells))
    }

    /// Create a matrix from explicit rows. The size is derived from the
    /// row count; every row must hold exactly that many cells.
    ///
    /// Cell arithmetic (`add`, `mul`) is unchecked `i64`: keep
    /// magnitudes small enough that sums and products stay in range.
    /// Random construction draws from `[0, 10)` and is always safe.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size < 1 {
            return Err(MatrixError::InvalidDimension(size));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::RaggedGrid {
                    row: i,
                    got: row.len(),
                    expected: size,
                });
            }
        }

        Ok(Self::from_grid(rows))
    }

    /// Unchecked builder used by operations that derive a new matrix.
    /// The caller guarantees a non-empty square grid.
    pub(crate) fn from_grid(cells: Vec<Vec<Cell>>) -> Self {
        let size = cells.len();
        Self { size, cells }
    }
}
