//! Ordering by aggregate cell sum
//!
//! The relational operations order matrices by the scalar sum of all
//! their cells, while equality stays elementwise. The two relations are
//! deliberately distinct: matrices with equal sums but different cells
//! compare `Equal` without being `==`.
//!
//! The order is partial over the domain - comparing matrices of
//! different size fails - so these are fallible methods rather than a
//! `PartialOrd` impl, which would have to absorb the mismatch silently.

use std::cmp::Ordering;

use kvadrat_core::MatrixError;

use crate::ops::require_same_size;
use crate::types::Matrix;

impl Matrix {
    /// Compare two same-size matrices by aggregate cell sum.
    pub fn compare(&self, other: &Matrix) -> Result<Ordering, MatrixError> {
        require_same_size(self, other)?;
        Ok(self.cell_sum().cmp(&other.cell_sum()))
    }

    /// `self`'s cell sum is strictly greater than `other`'s.
    pub fn gt(&self, other: &Matrix) -> Result<bool, MatrixError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self`'s cell sum is strictly less than `other`'s.
    pub fn lt(&self, other: &Matrix) -> Result<bool, MatrixError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Elementwise equal, or strictly greater by cell sum.
    pub fn ge(&self, other: &Matrix) -> Result<bool, MatrixError> {
        if self == other {
            return Ok(true);
        }
        self.gt(other)
    }

    /// Elementwise equal, or strictly less by cell sum.
    pub fn le(&self, other: &Matrix) -> Result<bool, MatrixError> {
        if self == other {
            return Ok(true);
        }
        self.lt(other)
    }
}
