//! Analyzer configuration file.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! platform: desktop
//! acceptance:
//!   min_score: 55
//!   allow_no_data: false
//! batch:
//!   jobs: 4
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use hardware_fit_core::Platform;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};
use crate::report::{AcceptancePolicy, DEFAULT_MIN_SCORE};

/// Current configuration format version.
pub const CONFIG_VERSION: &str = "1.0";

/// Acceptance thresholds, mirrored into an [`AcceptancePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceConfig {
    /// Minimum score (0–100) for an input to be accepted.
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    /// Accept inputs from which nothing could be extracted.
    #[serde(default)]
    pub allow_no_data: bool,
}

fn default_min_score() -> u8 {
    DEFAULT_MIN_SCORE
}

impl Default for AcceptanceConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            allow_no_data: false,
        }
    }
}

/// Batch execution settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Worker threads; `None` picks a default from available parallelism.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

/// Top-level analyzer configuration.
///
/// # Examples
///
/// ```
/// use hardware_fit_analyzer::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.policy().min_score, 55);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Default pipeline for inputs that do not specify one.
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub acceptance: AcceptanceConfig,
    #[serde(default)]
    pub batch: BatchSettings,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            platform: Platform::default(),
            acceptance: AcceptanceConfig::default(),
            batch: BatchSettings::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](AnalyzerError::Io) if the file cannot be read,
    /// [`Yaml`](AnalyzerError::Yaml) if parsing fails, or
    /// [`InvalidConfig`](AnalyzerError::InvalidConfig) if a value is out of
    /// range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.acceptance.min_score > 100 {
            return Err(AnalyzerError::InvalidConfig(format!(
                "acceptance.min_score must be within 0..=100, got {}",
                self.acceptance.min_score
            )));
        }
        if self.batch.jobs == Some(0) {
            return Err(AnalyzerError::InvalidConfig(
                "batch.jobs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn policy(&self) -> AcceptancePolicy {
        AcceptancePolicy {
            min_score: self.acceptance.min_score,
            allow_no_data: self.acceptance.allow_no_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hardware-fit.yml");

        let config = AnalyzerConfig {
            platform: Platform::AppleSilicon,
            acceptance: AcceptanceConfig {
                min_score: 70,
                allow_no_data: true,
            },
            batch: BatchSettings { jobs: Some(2) },
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.policy().min_score, 70);
        assert!(loaded.policy().allow_no_data);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AnalyzerConfig = serde_yaml::from_str("version: \"1.0\"\n").unwrap();
        assert_eq!(config.platform, Platform::Desktop);
        assert_eq!(config.acceptance, AcceptanceConfig::default());
        assert_eq!(config.batch.jobs, None);
    }

    #[test]
    fn test_platform_parses_snake_case() {
        let config: AnalyzerConfig =
            serde_yaml::from_str("version: \"1.0\"\nplatform: apple_silicon\n").unwrap();
        assert_eq!(config.platform, Platform::AppleSilicon);
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let mut config = AnalyzerConfig::default();
        config.acceptance.min_score = 101;
        assert!(matches!(
            config.validate(),
            Err(AnalyzerError::InvalidConfig(_))
        ));

        let mut config = AnalyzerConfig::default();
        config.batch.jobs = Some(0);
        assert!(matches!(
            config.validate(),
            Err(AnalyzerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = AnalyzerConfig::load(dir.path().join("absent.yml"));
        assert!(matches!(result, Err(AnalyzerError::Io(_))));
    }
}
