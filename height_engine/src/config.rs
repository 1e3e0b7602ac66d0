//! Formatter and chart configuration.
//!
//! Configuration can be built in code, or read from a TOML file:
//!
//! ```toml
//! max_significant_digits = 4
//! gridline_count = 10
//! default_chart_height_m = 2.0
//! feet_inches_limit_ft = 100.0
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HeightError, HeightResult};

/// Configuration for formatting and grid computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Maximum significant digits rendered by `format_number`.
    #[serde(default = "default_max_significant_digits")]
    pub max_significant_digits: usize,
    /// Number of gridline intervals; a chart gets `gridline_count + 1` lines.
    #[serde(default = "default_gridline_count")]
    pub gridline_count: usize,
    /// Max height used when a comparison has no entries.
    #[serde(default = "default_chart_height_m")]
    pub default_chart_height_m: f64,
    /// Foot charts below this height label gridlines as feet + inches.
    #[serde(default = "default_feet_inches_limit_ft")]
    pub feet_inches_limit_ft: f64,
}

fn default_max_significant_digits() -> usize {
    3
}

fn default_gridline_count() -> usize {
    20
}

fn default_chart_height_m() -> f64 {
    2.0
}

fn default_feet_inches_limit_ft() -> f64 {
    100.0
}

/// Largest digit count `format_number` will honour.
pub const MAX_SIGNIFICANT_DIGITS: usize = 15;

const MAX_GRIDLINES: usize = 1000;

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_significant_digits: default_max_significant_digits(),
            gridline_count: default_gridline_count(),
            default_chart_height_m: default_chart_height_m(),
            feet_inches_limit_ft: default_feet_inches_limit_ft(),
        }
    }
}

impl FormatConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> HeightResult<Self> {
        let config: FormatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(FormatConfig)` if the file was read, parsed and validated
    /// * `Err(HeightError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> HeightResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded format config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `height_engine.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    ///
    /// Falls back to [`FormatConfig::default`] when neither exists. A file that
    /// exists but fails to parse is an error.
    pub fn from_default_location() -> HeightResult<Self> {
        Self::from_dir(Path::new("."))
    }

    /// [`FormatConfig::from_default_location`] rooted at `root`.
    pub fn from_dir<P: AsRef<Path>>(root: P) -> HeightResult<Self> {
        let root = root.as_ref();
        let search_paths: [PathBuf; 2] = [
            root.join("height_engine.toml"),
            root.join("config").join("height_engine.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        log::warn!("No height_engine.toml found, using default format config");
        Ok(Self::default())
    }

    /// Check field ranges.
    pub fn validate(&self) -> HeightResult<()> {
        if self.max_significant_digits == 0 || self.max_significant_digits > MAX_SIGNIFICANT_DIGITS
        {
            return Err(HeightError::Configuration(format!(
                "max_significant_digits must be in 1..={}, got {}",
                MAX_SIGNIFICANT_DIGITS, self.max_significant_digits
            )));
        }

        if self.gridline_count == 0 || self.gridline_count > MAX_GRIDLINES {
            return Err(HeightError::Configuration(format!(
                "gridline_count must be in 1..={}, got {}",
                MAX_GRIDLINES, self.gridline_count
            )));
        }

        if !(self.default_chart_height_m.is_finite() && self.default_chart_height_m > 0.0) {
            return Err(HeightError::Configuration(format!(
                "default_chart_height_m must be a positive finite length, got {}",
                self.default_chart_height_m
            )));
        }

        if !(self.feet_inches_limit_ft.is_finite() && self.feet_inches_limit_ft > 0.0) {
            return Err(HeightError::Configuration(format!(
                "feet_inches_limit_ft must be positive, got {}",
                self.feet_inches_limit_ft
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = FormatConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_significant_digits, 3);
        assert_eq!(config.gridline_count, 20);
        assert_eq!(config.default_chart_height_m, 2.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = FormatConfig::from_toml_str("gridline_count = 10").unwrap();
        assert_eq!(config.gridline_count, 10);
        assert_eq!(config.max_significant_digits, 3);
        assert_eq!(config.feet_inches_limit_ft, 100.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(FormatConfig::from_toml_str("").unwrap(), FormatConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        for content in [
            "max_significant_digits = 0",
            "max_significant_digits = 40",
            "gridline_count = 0",
            "default_chart_height_m = -2.0",
            "default_chart_height_m = 0.0",
            "feet_inches_limit_ft = 0.0",
        ] {
            assert!(
                matches!(
                    FormatConfig::from_toml_str(content),
                    Err(HeightError::Configuration(_))
                ),
                "{}",
                content
            );
        }
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            FormatConfig::from_toml_str("gridline_count = \"many\""),
            Err(HeightError::Configuration(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_significant_digits = 5").unwrap();
        writeln!(file, "default_chart_height_m = 1.5").unwrap();

        let config = FormatConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_significant_digits, 5);
        assert_eq!(config.default_chart_height_m, 1.5);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FormatConfig::from_file(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(HeightError::Configuration(_))));
    }

    #[test]
    fn test_from_dir_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(FormatConfig::from_dir(dir.path()).unwrap(), FormatConfig::default());
    }

    #[test]
    fn test_from_dir_search_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(dir.path().join("config/height_engine.toml"), "gridline_count = 10").unwrap();
        assert_eq!(FormatConfig::from_dir(dir.path()).unwrap().gridline_count, 10);

        // The current directory wins over config/
        fs::write(dir.path().join("height_engine.toml"), "gridline_count = 5").unwrap();
        assert_eq!(FormatConfig::from_dir(dir.path()).unwrap().gridline_count, 5);
    }

    #[test]
    fn test_from_dir_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("height_engine.toml"), "gridline_count = ").unwrap();
        assert!(matches!(
            FormatConfig::from_dir(dir.path()),
            Err(HeightError::Configuration(_))
        ));
    }

    #[test]
    fn test_from_default_location_without_file() {
        // The crate directory ships no height_engine.toml
        let config = FormatConfig::from_default_location().unwrap();
        assert_eq!(config, FormatConfig::default());
    }
}
