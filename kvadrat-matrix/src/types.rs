//! The core matrix type

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use kvadrat_core::{Cell, MatrixError};
use serde::{Deserialize, Serialize};

/// A fixed-size, square, integer-valued matrix.
///
/// Row-major storage, indexed `cells[row][col]`. The size is fixed at
/// construction and the grid always holds exactly `size` rows of `size`
/// cells. No operation mutates an existing instance; arithmetic and
/// derived operations all return new matrices.
///
/// Serialized as its rows alone; deserialization goes through the same
/// validation as [`Matrix::from_rows`], so a decoded matrix always
/// upholds the size invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Matrix {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Vec<Cell>>,
}

impl TryFrom<Vec<Vec<Cell>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<Cell>> {
    fn from(m: Matrix) -> Self {
        m.cells
    }
}

impl Matrix {
    /// Number of rows (equal to the number of columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterate over rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

/// Hash combines the size's hash with the exclusive-or of every cell's
/// hash, in row-major order. Equal matrices hash equal.
impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        let mut acc: u64 = 0;
        for row in &self.cells {
            for &cell in row {
                let mut cell_hasher = DefaultHasher::new();
                cell.hash(&mut cell_hasher);
                acc ^= cell_hasher.finish();
            }
        }
        acc.hash(state);
    }
}

/// One line per row, cells space-separated, with a line separator after
/// every row including the last.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
