//! Shape operations: transpose and reshape

use crate::{Matrix, MatrixError, Result};
use ndarray::Array2;

impl Matrix {
    /// A fresh `(cols, rows)` matrix with cell `(j, i)` taken from `(i, j)`.
    ///
    /// The source is unaltered.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_data(self.data.t().to_owned())
    }

    /// Reshape to `rows x cols`, keeping the row-major order of the cells.
    ///
    /// Requires `rows * cols` to equal the current element count. This is
    /// the only in-place operation in the library: the receiver itself is
    /// rewritten and returned for chaining. Callers needing the original
    /// shape must clone first.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<&mut Matrix> {
        let elements = self.rows() * self.cols();
        if rows * cols != elements {
            return Err(MatrixError::SizeMismatch {
                elements,
                slots: rows * cols,
            });
        }

        let old_cols = self.cols();
        let old = &self.data;
        let reshaped = Array2::from_shape_fn((rows, cols), |(r, c)| {
            let flat = r * cols + c;
            old[[flat / old_cols, flat % old_cols]]
        });
        self.data = reshaped;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_transpose() {
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 0).unwrap(), Cell::I32(3));
        assert_eq!(t.get(0, 1).unwrap(), Cell::I32(4));
        // source unaltered
        assert_eq!(a.shape(), (2, 3));
    }

    #[test]
    fn test_transpose_involution() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_reshape_row_major_order() {
        let mut a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        a.reshape(3, 2).unwrap();
        assert_eq!(
            a,
            Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap()
        );

        a.reshape(1, 6).unwrap();
        assert_eq!(
            a,
            Matrix::from_rows(vec![vec![1, 2, 3, 4, 5, 6]]).unwrap()
        );
    }

    #[test]
    fn test_reshape_in_place_chains() {
        let mut a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let reshaped = a.reshape(4, 1).unwrap();
        assert_eq!(reshaped.shape(), (4, 1));
        // the receiver itself was rewritten
        assert_eq!(a.shape(), (4, 1));
    }

    #[test]
    fn test_reshape_size_mismatch() {
        let mut a = Matrix::zeros(2, 3).unwrap();
        let err = a.reshape(4, 2).unwrap_err();
        assert_eq!(
            err,
            MatrixError::SizeMismatch {
                elements: 6,
                slots: 8
            }
        );
        // matrix untouched on failure
        assert_eq!(a.shape(), (2, 3));
    }
}
