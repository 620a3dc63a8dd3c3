use std::path::Path;

use serde::{Deserialize, Serialize};
use sitewatch_diff::DiffAlgorithm;

use crate::error::{ConfigError, ConfigResult};

/// Default alert threshold, in percent.
pub const DEFAULT_THRESHOLD_PERCENT: f32 = 25.0;

/// Changes below this percentage are reported as "no change".
pub const DEFAULT_NOISE_FLOOR_PERCENT: f32 = 0.01;

/// Settings for comparing two snapshots of one watched resource.
///
/// Every field has a default, so a TOML file only needs the keys it
/// overrides:
///
/// ```toml
/// algorithm = "word"
/// threshold_percent = 5.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Diff granularity.
    pub algorithm: DiffAlgorithm,
    /// Minimum change percentage that warrants an alert.
    pub threshold_percent: f32,
    /// Change percentages below this are treated as identical content.
    pub noise_floor_percent: f32,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            noise_floor_percent: DEFAULT_NOISE_FLOOR_PERCENT,
        }
    }
}

impl CompareConfig {
    /// Defaults with a specific algorithm.
    pub fn with_algorithm(algorithm: DiffAlgorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&contents)
    }

    /// Check that thresholds are within range.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=100.0).contains(&self.threshold_percent) {
            return Err(ConfigError::Invalid(format!(
                "threshold_percent must be within 0..=100, got {}",
                self.threshold_percent
            )));
        }
        if self.noise_floor_percent.is_nan() || self.noise_floor_percent < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "noise_floor_percent must be non-negative, got {}",
                self.noise_floor_percent
            )));
        }
        Ok(())
    }
}
