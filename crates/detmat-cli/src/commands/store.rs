//! The `store` commands: manage named matrices in a flat text file.
use std::path::Path;

use anyhow::{Context, Result};

use detmat::io::{load_store_file, save_store_file};
use detmat::math::Matrix;
use detmat::store::MatrixStore;

use crate::commands::det::run_det;
use crate::config::CliConfig;

/// One `name RxC` line per stored matrix.
pub fn list_lines(store: &MatrixStore) -> Vec<String> {
    store
        .iter()
        .map(|entry| {
            let (rows, cols) = entry.matrix.shape();
            format!("{} {}x{}", entry.name, rows, cols)
        })
        .collect()
}

pub fn list(path: &Path, config: &CliConfig) -> Result<Vec<String>> {
    let store = load_store_file(path, config.store_capacity)?;
    Ok(list_lines(&store))
}

/// Insert or replace `name` and rewrite the file. Returns whether a matrix was replaced.
pub fn save(path: &Path, name: &str, matrix: Matrix, config: &CliConfig) -> Result<bool> {
    let mut store = load_store_file(path, config.store_capacity)?;
    let replaced = store
        .insert(name, matrix)
        .with_context(|| format!("Failed to save matrix '{}'", name))?
        .is_some();
    save_store_file(path, &store)?;
    if replaced {
        log::info!("[detmat] Replaced matrix '{}' in {:?}", name, path);
    }
    Ok(replaced)
}

pub fn show(path: &Path, name: &str, config: &CliConfig) -> Result<String> {
    let store = load_store_file(path, config.store_capacity)?;
    let matrix = store.snapshot(name)?;
    let (rows, cols) = matrix.shape();
    Ok(format!("{} {}x{}\n{}", name, rows, cols, matrix))
}

pub fn det(path: &Path, name: &str, config: &CliConfig) -> Result<String> {
    let store = load_store_file(path, config.store_capacity)?;
    let matrix = store.get(name).ok_or_else(|| detmat::StoreError::NotFound(name.to_string()))?;
    run_det(matrix, config)
}

pub fn remove(path: &Path, name: &str, config: &CliConfig) -> Result<()> {
    let mut store = load_store_file(path, config.store_capacity)?;
    store.remove(name)?;
    save_store_file(path, &store)
}
