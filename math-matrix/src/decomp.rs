//! LU factorization and determinants
//!
//! Doolittle factorization without pivoting: the matrix is required to have
//! a nonzero leading element, and a row exchange that would rescue an
//! otherwise factorizable matrix is deliberately not performed. That exact
//! failure mode is what routes [`determinant`] onto its cofactor expansion
//! fallback, so adding pivoting here would silently change which matrices
//! take the O(n!) path.

use crate::numeric::Cell;
use crate::{Matrix, MatrixError, Result};
use ndarray::Array2;

/// LU factorization result: `lower * upper` reconstructs the input.
///
/// `lower` is unit lower triangular, `upper` holds the pivot diagonal.
/// Both are fresh `f64` matrices of the input's dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    pub lower: Matrix,
    pub upper: Matrix,
}

impl LuFactors {
    /// Product of the pivot diagonal.
    ///
    /// Equals the determinant of the factored matrix; no sign correction
    /// is needed because this factorization performs no row exchanges.
    pub fn pivot_product(&self) -> f64 {
        let n = self.upper.rows();
        (0..n).map(|i| self.upper.data[[i, i]].as_f64()).product()
    }
}

/// Factor a square matrix into unit-lower and upper triangular parts.
///
/// Computation is performed in `f64` regardless of the input cells' kinds.
/// Fails with [`MatrixError::NotSquare`] on rectangular input, with
/// [`MatrixError::ZeroLeadingElement`] when the `(0, 0)` element is zero,
/// and with [`MatrixError::DegenerateFactor`] when an interior pivot
/// degenerates into a non-finite multiplier.
pub fn lu_factorize(matrix: &Matrix) -> Result<LuFactors> {
    if !matrix.is_square() {
        return Err(MatrixError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }

    let n = matrix.rows();
    let a = matrix.data.mapv(|c| c.as_f64());
    if a[[0, 0]] == 0.0 {
        return Err(MatrixError::ZeroLeadingElement);
    }

    let mut lower = Array2::<f64>::zeros((n, n));
    let mut upper = Array2::<f64>::zeros((n, n));

    // Known up front: U's first row, L's first column, L's unit diagonal.
    for i in 0..n {
        upper[[0, i]] = a[[0, i]];
        lower[[i, 0]] = a[[i, 0]] / a[[0, 0]];
        lower[[i, i]] = 1.0;
    }

    // Each remaining entry depends only on entries solved before it: for
    // row r, the L entries left of the diagonal (in column order), then
    // the U entries from the diagonal rightwards.
    for r in 1..n {
        for c in 1..r {
            let mut v = a[[r, c]];
            for j in 0..c {
                v -= upper[[j, c]] * lower[[r, j]];
            }
            v /= upper[[c, c]];
            if !v.is_finite() {
                return Err(MatrixError::DegenerateFactor { value: v });
            }
            lower[[r, c]] = v;
        }
        for c in r..n {
            let mut v = a[[r, c]];
            for i in 0..r {
                v -= upper[[i, c]] * lower[[r, i]];
            }
            upper[[r, c]] = v;
        }
    }

    Ok(LuFactors {
        lower: Matrix::from_data(lower.mapv(Cell::F64)),
        upper: Matrix::from_data(upper.mapv(Cell::F64)),
    })
}

/// Determinant of a square matrix.
///
/// The O(n³) LU path is tried first; when the factorization fails on a
/// zero or degenerate pivot the O(n!) cofactor expansion takes over.
/// Rectangular input is a hard error and never reaches the fallback.
pub fn determinant(matrix: &Matrix) -> Result<f64> {
    if !matrix.is_square() {
        return Err(MatrixError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }

    match lu_factorize(matrix) {
        Ok(factors) => Ok(factors.pivot_product()),
        Err(e @ (MatrixError::ZeroLeadingElement | MatrixError::DegenerateFactor { .. })) => {
            log::debug!("LU factorization failed ({e}); falling back to cofactor expansion");
            let a = matrix.data.mapv(|c| c.as_f64());
            Ok(cofactor_det(&a))
        }
        Err(e) => Err(e),
    }
}

/// Recursive cofactor (Laplace) expansion along the first row.
fn cofactor_det(a: &Array2<f64>) -> f64 {
    let s = a.nrows();
    if s == 1 {
        return a[[0, 0]];
    }

    let mut det = 0.0;
    let mut sign = 1.0;
    for i in 0..s {
        let minor = Array2::from_shape_fn((s - 1, s - 1), |(r, c)| {
            let col = if c < i { c } else { c + 1 };
            a[[r + 1, col]]
        });
        det += sign * a[[0, i]] * cofactor_det(&minor);
        sign = -sign;
    }
    det
}

impl Matrix {
    /// LU factorization of this matrix. See [`lu_factorize`].
    pub fn lu(&self) -> Result<LuFactors> {
        lu_factorize(self)
    }

    /// Determinant of this matrix. See [`determinant`].
    pub fn det(&self) -> Result<f64> {
        determinant(self)
    }
}
