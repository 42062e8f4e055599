use anyhow::Result;
use std::path::Path;

/// Render a determinant the way the result line is printed, e.g. `Determinant: -2.00`.
pub fn format_determinant(det: f64, precision: usize) -> String {
    format!("Determinant: {:.*}", precision, det)
}

/// Fail early with a readable message when an input file is missing.
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Not a regular file: {}", path.display());
    }
    Ok(())
}
