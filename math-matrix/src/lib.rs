//! Dense numeric matrix library
//!
//! This crate provides a dense, row-major matrix of tagged numeric cells,
//! elementwise and matrix arithmetic computed at a caller-selected numeric
//! width, shape operations, and LU-based determinants with a cofactor
//! expansion fallback for matrices the pivot-free factorization cannot
//! handle.
//!
//! Every operation that produces a matrix returns a fresh one; [`Matrix::reshape`]
//! is the single documented in-place mutator.
//!
//! # Example
//! ```
//! use math_matrix::{Matrix, NumericKind};
//!
//! let a = Matrix::from_rows(vec![vec![1, 4], vec![3, 2], vec![9, 5]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![1.6, 3.1, 7.8], vec![2.5, 1.0, 2.4]]).unwrap();
//!
//! let product = a.dot(&b, NumericKind::F64).unwrap();
//! assert_eq!(product.shape(), (3, 3));
//!
//! let det = Matrix::identity(4).unwrap().det().unwrap();
//! assert_eq!(det, 1.0);
//! ```

mod decomp;
mod display;
mod matrix;
mod numeric;
mod ops;
mod shape;

pub use decomp::{determinant, lu_factorize, LuFactors};
pub use matrix::Matrix;
pub use numeric::{Cell, NumericKind};

/// Error types for matrix operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix must have at least one row and one column")]
    Empty,

    #[error("input is not rectangular: row {row} has {found} elements, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("operation requires a square matrix, got [{rows}, {cols}]")]
    NotSquare { rows: usize, cols: usize },

    #[error(
        "cannot combine matrix of size [{lhs_rows}, {lhs_cols}] \
         with matrix of size [{rhs_rows}, {rhs_cols}]"
    )]
    ShapeMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("{elements} elements do not fit into {slots} slots")]
    SizeMismatch { elements: usize, slots: usize },

    #[error("index [{row}, {col}] out of bounds for matrix of size [{rows}, {cols}]")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unable to factorize: first element of matrix is zero")]
    ZeroLeadingElement,

    #[error("unable to factorize: computed a non-finite multiplier ({value})")]
    DegenerateFactor { value: f64 },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
