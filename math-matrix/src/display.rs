//! Human-readable rendering
//!
//! Rows are framed by vertical bars, cells right-aligned in equal-width
//! columns. Float cells honor the matrix's display-precision setting;
//! integer cells print plainly.

use crate::numeric::{Cell, NumericKind};
use crate::Matrix;
use std::fmt;

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Cell::F64(v) => write!(f, "{v}"),
            Cell::F32(v) => write!(f, "{v}"),
            Cell::I64(v) => write!(f, "{v}"),
            Cell::I32(v) => write!(f, "{v}"),
            Cell::I16(v) => write!(f, "{v}"),
            Cell::I8(v) => write!(f, "{v}"),
        }
    }
}

fn render(cell: Cell, precision: usize) -> String {
    match cell {
        Cell::F64(v) => format!("{v:.precision$}"),
        Cell::F32(v) => format!("{v:.precision$}"),
        Cell::I64(v) => v.to_string(),
        Cell::I32(v) => v.to_string(),
        Cell::I16(v) => v.to_string(),
        Cell::I8(v) => v.to_string(),
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .data
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&c| render(c, self.precision)).collect())
            .collect();

        let width = rendered
            .iter()
            .flatten()
            .map(String::len)
            .max()
            .unwrap_or(0);

        for row in &rendered {
            write!(f, "|")?;
            for cell in row {
                write!(f, "  {cell:>width$}")?;
            }
            writeln!(f, "  |")?;
        }
        Ok(())
    }
}
