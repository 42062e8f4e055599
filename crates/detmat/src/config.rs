use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the determinant treats a matrix whose row and column counts differ.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NonSquarePolicy {
    /// Report a determinant of 0.0.
    #[default]
    Zero,
    /// Fail with `MatrixError::DimensionMismatch`.
    Error,
}

impl FromStr for NonSquarePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(NonSquarePolicy::Zero),
            "error" => Ok(NonSquarePolicy::Error),
            _ => Err(format!(
                "Unknown non-square policy: {}. Expected `zero` or `error`",
                s
            )),
        }
    }
}

/// Settings for the determinant computation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DeterminantConfig {
    /// Pivots with `|p| <= pivot_tolerance` count as zero. `0.0` is an exact comparison.
    pub pivot_tolerance: f64,
    pub non_square: NonSquarePolicy,
}

impl DeterminantConfig {
    /// Checked constructor: the tolerance must be finite and non-negative.
    pub fn new(pivot_tolerance: f64, non_square: NonSquarePolicy) -> Result<Self, String> {
        let config = Self {
            pivot_tolerance,
            non_square,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(format!(
                "Invalid pivot tolerance: {}. Expected a finite value >= 0",
                self.pivot_tolerance
            ));
        }
        Ok(())
    }

    pub fn strict() -> Self {
        Self {
            non_square: NonSquarePolicy::Error,
            ..Self::default()
        }
    }
}

impl Default for DeterminantConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: 0.0,
            non_square: NonSquarePolicy::Zero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite_tolerances() {
        for tol in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(DeterminantConfig::new(tol, NonSquarePolicy::Zero).is_err(), "{}", tol);
        }
        assert!(DeterminantConfig::new(0.0, NonSquarePolicy::Zero).is_ok());
        assert!(DeterminantConfig::default().validate().is_ok());
    }
}
