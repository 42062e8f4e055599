//! Integration tests for the named-matrix store, its text file, and config types.

use std::str::FromStr;

use detmat::config::{DeterminantConfig, NonSquarePolicy};
use detmat::io::{load_store_file, save_store_file};
use detmat::math::{determinant_with_config, Matrix};
use detmat::store::{MatrixStore, DEFAULT_CAPACITY};
use detmat::MatrixError;

// ---------------------------------------------------------------------------
// Store file persistence
// ---------------------------------------------------------------------------

#[test]
fn store_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrices.txt");

    let mut store = MatrixStore::default();
    store
        .insert("rot", Matrix::from_rows(&[vec![0, -1], vec![1, 0]]).unwrap())
        .unwrap();
    store
        .insert("row", Matrix::from_rows(&[vec![1, 2, 3]]).unwrap())
        .unwrap();
    save_store_file(&path, &store).unwrap();

    let loaded = load_store_file(&path, DEFAULT_CAPACITY).unwrap();
    assert_eq!(loaded, store);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "2\nrot 2 2\n0 -1\n1 0\nrow 1 3\n1 2 3\n"
    );
}

#[test]
fn missing_store_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = load_store_file(dir.path().join("absent.txt"), 5).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.capacity(), 5);
}

#[test]
fn malformed_store_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    std::fs::write(&path, "one\n").unwrap();
    let err = load_store_file(&path, DEFAULT_CAPACITY).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.txt"));
}

// ---------------------------------------------------------------------------
// DeterminantConfig
// ---------------------------------------------------------------------------

#[test]
fn default_config_is_exact_and_lenient() {
    let cfg = DeterminantConfig::default();
    assert_eq!(cfg.pivot_tolerance, 0.0);
    assert_eq!(cfg.non_square, NonSquarePolicy::Zero);
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: DeterminantConfig = serde_json::from_str(r#"{"non_square": "error"}"#).unwrap();
    assert_eq!(cfg, DeterminantConfig::strict());

    let cfg: DeterminantConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, DeterminantConfig::default());
}

#[test]
fn non_square_policy_from_str() {
    assert_eq!(NonSquarePolicy::from_str("ZERO").unwrap(), NonSquarePolicy::Zero);
    assert_eq!(NonSquarePolicy::from_str("error").unwrap(), NonSquarePolicy::Error);
    assert!(NonSquarePolicy::from_str("panic").is_err());
}

#[test]
fn strict_config_reports_dimension_mismatch() {
    let m = Matrix::create(3, 2).unwrap();
    let err = determinant_with_config(&m, &DeterminantConfig::strict()).unwrap_err();
    assert_eq!(err, MatrixError::DimensionMismatch { rows: 3, cols: 2 });
    assert!(err.to_string().contains("3x2"));
}
