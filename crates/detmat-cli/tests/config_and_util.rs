//! Integration tests for CLI config loading and result formatting.

use detmat::config::NonSquarePolicy;
use detmat_cli::config::{load_cli_config, CliConfig};
use detmat_cli::util::format_determinant;

// ---------------------------------------------------------------------------
// CliConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn cli_config_default_values() {
    let cfg = CliConfig::default();
    assert_eq!(cfg.precision, 2);
    assert_eq!(cfg.store_capacity, detmat::store::DEFAULT_CAPACITY);
    assert_eq!(cfg.determinant.pivot_tolerance, 0.0);
    assert_eq!(cfg.determinant.non_square, NonSquarePolicy::Zero);
}

#[test]
fn cli_config_round_trips_json() {
    let cfg = CliConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("pivot_tolerance"));
    assert!(json.contains("\"zero\""));
    let cfg2: CliConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn cli_config_loads_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("detmat.json");
    std::fs::write(
        &path,
        r#"{"precision": 4, "determinant": {"non_square": "error"}}"#,
    )
    .unwrap();

    let loaded = load_cli_config(&path).unwrap();
    assert_eq!(loaded.precision, 4);
    assert_eq!(loaded.determinant.non_square, NonSquarePolicy::Error);
    assert_eq!(loaded.store_capacity, CliConfig::default().store_capacity);
}

#[test]
fn cli_config_reports_bad_files() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_cli_config(dir.path().join("missing.json")).is_err());

    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_cli_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn cli_config_rejects_negative_tolerance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("detmat.json");
    std::fs::write(&path, r#"{"determinant": {"pivot_tolerance": -0.5}}"#).unwrap();
    let err = load_cli_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid pivot tolerance"), "{:#}", err);
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn determinant_is_printed_with_two_decimals_by_default() {
    let cfg = CliConfig::default();
    assert_eq!(format_determinant(-2.0, cfg.precision), "Determinant: -2.00");
    assert_eq!(format_determinant(0.0, cfg.precision), "Determinant: 0.00");
}
