use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use detmat::config::{DeterminantConfig, NonSquarePolicy};
use detmat::store::DEFAULT_CAPACITY;

/// Settings for the `detmat` binary, loaded from JSON and overridden by flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub determinant: DeterminantConfig,
    /// Decimal places when printing a determinant.
    pub precision: usize,
    pub store_capacity: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            determinant: DeterminantConfig::default(),
            precision: 2,
            store_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Load a CLI configuration from a JSON file.
pub fn load_cli_config<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: CliConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .determinant
        .validate()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    Ok(config)
}

impl CliConfig {
    /// Config file named by `--config`, or defaults when the flag is absent.
    pub fn from_config_argument(matches: &ArgMatches) -> Result<Self> {
        match matches.get_one::<PathBuf>("config") {
            Some(path) => {
                log::info!("[detmat] Using config: {:?}", path);
                load_cli_config(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// [`CliConfig::from_config_argument`] with `--strict`, `--tolerance` and
    /// `--precision` applied on top.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = Self::from_config_argument(matches)?;

        if matches.get_flag("strict") {
            config.determinant.non_square = NonSquarePolicy::Error;
        }

        if let Some(tolerance) = matches.get_one::<f64>("tolerance") {
            config.determinant.pivot_tolerance = *tolerance;
            config.determinant.validate().map_err(anyhow::Error::msg)?;
        }

        if let Some(precision) = matches.get_one::<usize>("precision") {
            config.precision = *precision;
        }

        Ok(config)
    }
}
