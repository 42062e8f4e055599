//! The `det` command: determinant of a single matrix.
use anyhow::{Context, Result};

use detmat::math::{determinant_with_config, Matrix};

use crate::config::CliConfig;
use crate::util::format_determinant;

/// Compute the determinant of `matrix` and render the result line.
pub fn run_det(matrix: &Matrix, config: &CliConfig) -> Result<String> {
    let (rows, cols) = matrix.shape();
    log::debug!("[detmat] Computing determinant of a {}x{} matrix", rows, cols);
    if !matrix.is_square() {
        log::warn!(
            "[detmat] Matrix is {}x{}; non-square policy is {:?}",
            rows,
            cols,
            config.determinant.non_square
        );
    }
    let det = determinant_with_config(matrix, &config.determinant)
        .context("Failed to compute determinant")?;
    Ok(format_determinant(det, config.precision))
}
