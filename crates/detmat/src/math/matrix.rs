use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::MatrixError;

/// Dense `rows x cols` grid of signed integers stored row-major.
///
/// Dimensions are fixed at construction. Entry `(i, j)` lives at linear index
/// `i * cols + j`, and the buffer always holds exactly `rows * cols` values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Allocate a zero-filled matrix.
    ///
    /// A zero dimension yields an empty matrix rather than an error. Allocation
    /// failure (including `rows * cols` overflowing) returns
    /// [`MatrixError::Allocation`] without constructing anything.
    pub fn create(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let data = zeroed_buffer::<i32>(rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    /// Wrap a row-major buffer; its length must be `rows * cols`.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<i32>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a list of rows, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(MatrixError::ShapeMismatch {
                    rows: rows.len(),
                    cols,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_shape_vec((rows.len(), cols), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.offset(row, col))
    }

    /// Entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] unless `row < nrows()` and `col < ncols()`.
    pub fn get(&self, row: usize, col: usize) -> Result<i32, MatrixError> {
        let offset = self.check_bounds(row, col)?;
        Ok(self.data[offset])
    }

    /// Store `value` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] unless `row < nrows()` and `col < ncols()`;
    /// the matrix is left untouched.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<(), MatrixError> {
        let offset = self.check_bounds(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[i32] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        (0..self.rows).map(move |r| self.row_slice(r))
    }
}

/// Zero-filled `rows * cols` buffer, reporting allocation failure instead of aborting.
pub(crate) fn zeroed_buffer<T: Default + Clone>(
    rows: usize,
    cols: usize,
) -> Result<Vec<T>, MatrixError> {
    let len = rows
        .checked_mul(cols)
        .ok_or(MatrixError::Allocation { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::Allocation { rows, cols })?;
    data.resize(len, T::default());
    Ok(data)
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
