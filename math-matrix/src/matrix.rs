//! Dense row-major matrix container
//!
//! [`Matrix`] owns its shape and cells. Construction validates shape
//! invariants once (at least one row and one column, rectangular input);
//! afterwards the `Array2` backing store keeps the container rectangular
//! by construction.

use crate::numeric::Cell;
use crate::{MatrixError, Result};
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Decimal places shown for float cells until the caller changes it.
pub const DEFAULT_DISPLAY_PRECISION: usize = 15;

/// A dense matrix of numeric cells.
///
/// Cells within one matrix may hold different numeric kinds; arithmetic
/// operations normalize their output to the kind chosen per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    pub(crate) data: Array2<Cell>,
    pub(crate) precision: usize,
}

/// Equality compares cell contents only, not the display setting.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Matrix {
    /// Build a matrix from rows of values.
    ///
    /// Fails if there are no rows, a row is empty, or the rows have
    /// unequal lengths.
    pub fn from_rows<C: Into<Cell>>(rows: Vec<Vec<C>>) -> Result<Self> {
        let cells: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let m = cells.len();
        if m == 0 {
            return Err(MatrixError::Empty);
        }
        let n = cells[0].len();
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        for (i, row) in cells.iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::Ragged {
                    row: i,
                    found: row.len(),
                    expected: n,
                });
            }
        }

        Ok(Self::from_data(Array2::from_shape_fn((m, n), |(r, c)| {
            cells[r][c]
        })))
    }

    /// Build a matrix from an existing cell array.
    pub fn from_array(data: Array2<Cell>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(MatrixError::Empty);
        }
        Ok(Self::from_data(data))
    }

    /// Allocate a `rows x cols` matrix with every cell set to integer zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(0i32, rows, cols)
    }

    /// The identity matrix: integer 1 on the diagonal, integer 0 elsewhere.
    pub fn identity(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        Ok(Self::from_data(Array2::from_shape_fn(
            (size, size),
            |(r, c)| {
                if r == c {
                    Cell::I32(1)
                } else {
                    Cell::I32(0)
                }
            },
        )))
    }

    /// A matrix with every cell set to `value`.
    pub fn filled<C: Into<Cell>>(value: C, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty);
        }
        Ok(Self::from_data(Array2::from_elem(
            (rows, cols),
            value.into(),
        )))
    }

    /// A matrix of integer zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(0i32, rows, cols)
    }

    /// A matrix with an independent uniform `[0, 1)` double in each cell.
    pub fn random(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty);
        }
        let mut rng = rand::rng();
        Ok(Self::from_data(Array2::from_shape_fn(
            (rows, cols),
            |_| Cell::F64(rng.random::<f64>()),
        )))
    }

    /// Internal constructor for shapes already known to be valid.
    pub(crate) fn from_data(data: Array2<Cell>) -> Self {
        Self {
            data,
            precision: DEFAULT_DISPLAY_PRECISION,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// The cell at `(row, col)`, bounds-checked.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.check_index(row, col)?;
        Ok(self.data[[row, col]])
    }

    /// Replace the cell at `(row, col)`, bounds-checked.
    pub fn set<C: Into<Cell>>(&mut self, row: usize, col: usize, value: C) -> Result<()> {
        self.check_index(row, col)?;
        self.data[[row, col]] = value.into();
        Ok(())
    }

    /// An independently owned copy of row `i`.
    pub fn row(&self, i: usize) -> Result<Vec<Cell>> {
        self.check_index(i, 0)?;
        Ok(self.data.row(i).to_vec())
    }

    /// An independently owned copy of column `j`.
    pub fn column(&self, j: usize) -> Result<Vec<Cell>> {
        self.check_index(0, j)?;
        Ok(self.data.column(j).to_vec())
    }

    /// Arithmetic mean of all cells, widened to `f64`.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.data.iter().map(Cell::as_f64).sum();
        sum / (self.rows() * self.cols()) as f64
    }

    /// Decimal places used for float cells when rendering.
    ///
    /// Negative input is clamped to zero.
    pub fn set_display_precision(&mut self, precision: i32) {
        self.precision = precision.max(0) as usize;
    }

    /// Current display precision.
    #[inline]
    pub fn display_precision(&self) -> usize {
        self.precision
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }
}
