//! Small tour of the library: construction, both determinant paths,
//! reshape and the matrix product.
//!
//! Run with `RUST_LOG=debug` to see the determinant fallback fire.

use math_matrix::{Matrix, NumericKind, Result};

fn main() -> Result<()> {
    env_logger::init();

    let a = Matrix::from_rows(vec![vec![1, 4], vec![3, 2], vec![9, 5]])?;
    let b = Matrix::from_rows(vec![vec![1.6, 3.1, 7.8], vec![2.5, 1.0, 2.4]])?;
    let mut c = Matrix::from_rows(vec![
        vec![5, 6, 6, 8],
        vec![2, 2, 2, 8],
        vec![6, 6, 2, 8],
        vec![2, 3, 6, 7],
    ])?;
    let d = Matrix::from_rows(vec![
        vec![3, 0, 0, 3, 0],
        vec![-3, 0, -2, 0, 0],
        vec![0, -1, 0, 0, -3],
        vec![0, 0, 0, 3, 3],
        vec![0, -1, 2, 0, 1],
    ])?;

    // d defeats the pivot-free factorization, so this goes through
    // cofactor expansion
    println!("{d}");
    println!("Determinant: {:.2}\n", d.det()?);

    // c factors cleanly: product of the pivot diagonal
    println!("{c}");
    println!("{}\n", c.det()?);

    println!("{}", c.reshape(1, 16)?);

    let product = a.dot(&b, NumericKind::F64)?;
    println!("{product}");

    Ok(())
}
