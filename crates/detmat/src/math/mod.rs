//! Integer matrix value type and its determinant.
//!
//! `Matrix` owns a fixed-size row-major grid of `i32`. `determinant` reads a
//! matrix without mutating it and works on a private `f64` copy.
pub mod determinant;
pub mod matrix;

pub use determinant::{determinant, determinant_with_config};
pub use matrix::Matrix;
