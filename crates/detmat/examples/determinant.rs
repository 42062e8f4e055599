//! Build a few matrices, keep them in a store, and print their determinants.
//!
//! Run with `RUST_LOG=debug` to see singular pivots reported.

use anyhow::Result;
use detmat::math::{determinant, Matrix};
use detmat::store::MatrixStore;

fn main() -> Result<()> {
    env_logger::init();

    let mut store = MatrixStore::default();
    store.insert("swap", Matrix::from_rows(&[vec![0, 1], vec![1, 0]])?)?;
    store.insert(
        "dependent",
        Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])?,
    )?;
    store.insert("wide", Matrix::create(2, 3)?)?;

    let mut mixed = Matrix::create(4, 4)?;
    for i in 0..4 {
        for j in 0..4 {
            mixed.set(i, j, (i as i32 + 1) * (j as i32 + 2) % 7 - 3)?;
        }
    }
    store.insert("mixed", mixed)?;

    for entry in store.iter() {
        let (rows, cols) = entry.matrix.shape();
        let det = determinant(&entry.matrix)?;
        println!("{} ({}x{}): {:.2}", entry.name, rows, cols, det);
    }

    detmat::io::write_store(&store, std::io::stdout().lock())?;
    Ok(())
}
