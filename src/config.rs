// ⚙️ Tracker Configuration - Settings as data
//
// Optional JSON file; every field has a default, so `{}` is a valid config.
// CLI flags are applied on top by the binary.
//
// Example:
//   { "min_average_speed": 5.0, "max_average_speed": 100.0, "format": "json" }

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::report::OutputFormat;
use crate::validation::{TripValidator, MAX_AVERAGE_SPEED, MIN_AVERAGE_SPEED};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Slowest trip speed (mph) that still counts
    pub min_average_speed: f64,

    /// Fastest trip speed (mph) that still counts
    pub max_average_speed: f64,

    /// Report format
    pub format: OutputFormat,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            min_average_speed: MIN_AVERAGE_SPEED,
            max_average_speed: MAX_AVERAGE_SPEED,
            format: OutputFormat::default(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: TrackerConfig = serde_json::from_str(content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_average_speed", self.min_average_speed),
            ("max_average_speed", self.max_average_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpeedBound { field, value });
            }
        }

        if self.min_average_speed > self.max_average_speed {
            return Err(ConfigError::InvertedSpeedBounds {
                min: self.min_average_speed,
                max: self.max_average_speed,
            });
        }

        Ok(())
    }

    pub fn validator(&self) -> TripValidator {
        TripValidator::with_bounds(self.min_average_speed, self.max_average_speed)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();

        assert_eq!(config.min_average_speed, 5.0);
        assert_eq!(config.max_average_speed, 100.0);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.validator(), TripValidator::new());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = TrackerConfig::from_json("{}").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = TrackerConfig::from_json(r#"{ "max_average_speed": 80.0, "format": "csv" }"#).unwrap();

        assert_eq!(config.min_average_speed, 5.0);
        assert_eq!(config.max_average_speed, 80.0);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(TrackerConfig::from_json(r#"{ "max_speed": 80.0 }"#).is_err());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = TrackerConfig {
            min_average_speed: 50.0,
            max_average_speed: 10.0,
            ..TrackerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedSpeedBounds { min: 50.0, max: 10.0 })
        );
    }

    #[test]
    fn test_negative_bound_rejected() {
        let config = TrackerConfig {
            min_average_speed: -1.0,
            ..TrackerConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeedBound { field: "min_average_speed", .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(TrackerConfig::from_file("/definitely/not/here.json").is_err());
    }
}
