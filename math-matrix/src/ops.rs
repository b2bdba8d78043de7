//! Elementwise, scalar and matrix arithmetic
//!
//! Every operation takes the [`NumericKind`] its output cells should be
//! computed and stored in. Input cells are coerced to that width before the
//! arithmetic runs, so the kind parameter fixes overflow and truncation
//! behavior per call regardless of what the operands hold.

use crate::numeric::{Cell, NumericKind};
use crate::{Matrix, MatrixError, Result};
use ndarray::Array2;

impl Matrix {
    /// Elementwise sum. Operands must have identical shape.
    pub fn add(&self, rhs: &Matrix, kind: NumericKind) -> Result<Matrix> {
        self.elementwise(rhs, |a, b| kind.add(a, b))
    }

    /// Elementwise difference. Operands must have identical shape.
    pub fn sub(&self, rhs: &Matrix, kind: NumericKind) -> Result<Matrix> {
        self.elementwise(rhs, |a, b| kind.sub(a, b))
    }

    /// Hadamard (elementwise) product. Operands must have identical shape.
    ///
    /// Unlike [`Matrix::dot`], this product is commutative.
    pub fn hadamard(&self, rhs: &Matrix, kind: NumericKind) -> Result<Matrix> {
        self.elementwise(rhs, |a, b| kind.mul(a, b))
    }

    /// Multiply every cell by a scalar.
    pub fn scale<C: Into<Cell>>(&self, scalar: C, kind: NumericKind) -> Matrix {
        let s = scalar.into();
        Matrix::from_data(self.data.mapv(|c| kind.mul(c, s)))
    }

    /// Matrix product, with `self` on the left.
    ///
    /// Requires `self.cols() == rhs.rows()`; the result has shape
    /// `self.rows() x rhs.cols()`. The sum of products accumulates under
    /// `kind`, coercing each operand pair before its partial product, so
    /// integer kinds truncate every partial product rather than just the
    /// final sum. `a.dot(b, ..)` and `b.dot(a, ..)` differ in general.
    pub fn dot(&self, rhs: &Matrix, kind: NumericKind) -> Result<Matrix> {
        if self.cols() != rhs.rows() {
            return Err(self.shape_mismatch(rhs));
        }

        let (m, n) = (self.rows(), rhs.cols());
        let inner = self.cols();
        let mut out = Array2::from_elem((m, n), kind.zero());
        for i in 0..m {
            for j in 0..n {
                let mut sum = kind.zero();
                for k in 0..inner {
                    sum = kind.add(sum, kind.mul(self.data[[i, k]], rhs.data[[k, j]]));
                }
                out[[i, j]] = sum;
            }
        }
        Ok(Matrix::from_data(out))
    }

    fn elementwise<F>(&self, rhs: &Matrix, op: F) -> Result<Matrix>
    where
        F: Fn(Cell, Cell) -> Cell,
    {
        if self.shape() != rhs.shape() {
            return Err(self.shape_mismatch(rhs));
        }
        let out = Array2::from_shape_fn(self.data.raw_dim(), |(r, c)| {
            op(self.data[[r, c]], rhs.data[[r, c]])
        });
        Ok(Matrix::from_data(out))
    }

    fn shape_mismatch(&self, rhs: &Matrix) -> MatrixError {
        MatrixError::ShapeMismatch {
            lhs_rows: self.rows(),
            lhs_cols: self.cols(),
            rhs_rows: rhs.rows(),
            rhs_cols: rhs.cols(),
        }
    }
}
