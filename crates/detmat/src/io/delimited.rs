//! Headerless TSV/CSV reader for a single matrix.
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::math::Matrix;

fn delimiter_for(path: &Path) -> Result<u8> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("tsv") => Ok(b'\t'),
        Some("csv") => Ok(b','),
        _ => bail!("File must have a .tsv or .csv extension: {}", path.display()),
    }
}

/// Read a matrix from a `.tsv` or `.csv` file where each record is one row.
pub fn read_matrix_delimited<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let delimiter = delimiter_for(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open matrix file: {}", path.display()))?;

    let mut values = Vec::new();
    let mut cols = None;
    let mut rows = 0usize;

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let width = *cols.get_or_insert(record.len());
        if record.len() != width {
            return Err(anyhow!(
                "Row {} has {} values, expected {}",
                row_idx + 1,
                record.len(),
                width
            ));
        }
        for (col_idx, field) in record.iter().enumerate() {
            let value = field.parse::<i32>().with_context(|| {
                format!(
                    "Invalid integer '{}' at row {}, column {}",
                    field,
                    row_idx + 1,
                    col_idx + 1
                )
            })?;
            values.push(value);
        }
        rows += 1;
    }

    let cols = cols.ok_or_else(|| anyhow!("Matrix file is empty: {}", path.display()))?;
    let matrix =
        Matrix::from_shape_vec((rows, cols), values).context("Failed to build matrix")?;
    log::debug!("Read {}x{} matrix from {}", rows, cols, path.display());
    Ok(matrix)
}
