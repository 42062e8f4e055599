use crate::config::{DeterminantConfig, NonSquarePolicy};
use crate::error::MatrixError;
use crate::math::matrix::{zeroed_buffer, Matrix};

/// Determinant of `matrix` using the default configuration.
///
/// Non-square input yields `0.0`; an exactly zero pivot yields `0.0`.
pub fn determinant(matrix: &Matrix) -> Result<f64, MatrixError> {
    determinant_with_config(matrix, &DeterminantConfig::default())
}

/// Determinant by Gaussian elimination with partial pivoting.
///
/// The integer entries are promoted into a private `f64` scratch buffer, so the
/// caller's matrix is only read. For each column `k` the row with the largest
/// `|a[i][k]|` among rows `k..n` is swapped into place (the first maximum wins),
/// each swap flipping the sign. A pivot that is exactly zero, or has
/// `|a[k][k]| <= pivot_tolerance`, ends the elimination with `0.0`. Otherwise
/// the result is the product of the diagonal times the sign.
///
/// # Errors
///
/// * [`MatrixError::Allocation`] if the scratch buffer cannot be obtained.
/// * [`MatrixError::DimensionMismatch`] for non-square input when
///   `config.non_square` is [`NonSquarePolicy::Error`].
pub fn determinant_with_config(
    matrix: &Matrix,
    config: &DeterminantConfig,
) -> Result<f64, MatrixError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return match config.non_square {
            NonSquarePolicy::Zero => {
                log::debug!("non-square {}x{} matrix, determinant is 0", rows, cols);
                Ok(0.0)
            }
            NonSquarePolicy::Error => Err(MatrixError::DimensionMismatch { rows, cols }),
        };
    }

    let n = rows;
    let mut data = zeroed_buffer::<f64>(n, n)?;
    for (dst, &src) in data.iter_mut().zip(matrix.as_slice()) {
        *dst = f64::from(src);
    }

    let mut sign = 1.0;
    for k in 0..n {
        let pivot_row = find_pivot_row(&data, n, k);

        if pivot_row != k {
            swap_rows(&mut data, n, k, pivot_row);
            sign = -sign;
        }

        let pivot = data[k * n + k];
        if pivot == 0.0 || pivot.abs() <= config.pivot_tolerance {
            log::debug!("zero pivot in column {}, matrix is singular", k);
            return Ok(0.0);
        }

        for i in k + 1..n {
            let factor = data[i * n + k] / pivot;
            data[i * n + k] = factor;
            for j in k + 1..n {
                data[i * n + j] -= factor * data[k * n + j];
            }
        }
    }

    let det = (0..n).map(|k| data[k * n + k]).product::<f64>() * sign;
    Ok(det)
}

/// Row in `k..n` holding the largest magnitude in column `k`; ties keep the earliest row.
fn find_pivot_row(data: &[f64], n: usize, k: usize) -> usize {
    let mut max_row = k;
    for i in k + 1..n {
        if data[i * n + k].abs() > data[max_row * n + k].abs() {
            max_row = i;
        }
    }
    max_row
}

fn swap_rows(data: &mut [f64], n: usize, a: usize, b: usize) {
    for j in 0..n {
        data.swap(a * n + j, b * n + j);
    }
}
