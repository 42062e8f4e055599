use std::error::Error;
use std::fmt;

/// Failures raised by matrix construction, element access and the determinant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Storage for a `rows x cols` buffer could not be obtained.
    Allocation { rows: usize, cols: usize },
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Only produced when the non-square policy is `Error`.
    DimensionMismatch { rows: usize, cols: usize },
    ShapeMismatch { rows: usize, cols: usize, len: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Allocation { rows, cols } => {
                write!(f, "failed to allocate storage for a {}x{} matrix", rows, cols)
            }
            MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of range for a {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::DimensionMismatch { rows, cols } => write!(
                f,
                "determinant requires a square matrix, got {}x{}",
                rows, cols
            ),
            MatrixError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for MatrixError {}

/// Failures raised by the named-matrix store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    CapacityExceeded { capacity: usize },
    InvalidName(String),
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::CapacityExceeded { capacity } => {
                write!(f, "matrix store is full ({} entries)", capacity)
            }
            StoreError::InvalidName(name) => write!(
                f,
                "invalid matrix name {:?}: names must be non-empty and contain no whitespace",
                name
            ),
            StoreError::NotFound(name) => write!(f, "no matrix named {:?} in the store", name),
        }
    }
}

impl Error for StoreError {}
