//! detmat: integer matrices and their determinants.
//!
//! The core is [`math::Matrix`] and [`math::determinant`], a partial-pivoted
//! Gaussian elimination over a private floating-point copy. Around it sit a
//! named-matrix store owned by the application and the file formats used to
//! persist it.
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod store;

pub use config::{DeterminantConfig, NonSquarePolicy};
pub use error::{MatrixError, StoreError};
pub use math::{determinant, determinant_with_config, Matrix};
pub use store::MatrixStore;
