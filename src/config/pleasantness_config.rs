//! Condition scores used by the pleasantness scorer.
//!
//! The configuration is a YAML document mapping condition names, as they appear
//! in the forecast, to a score between 0 and 10:
//!
//! ```yaml
//! conditions:
//!   Clear: 10
//!   Clouds: 7
//!   Rain: 2
//! ```

use crate::config::error::ConfigError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Score given to a condition the configuration does not list.
pub const UNKNOWN_CONDITION_SCORE: f64 = 0.0;

/// Maps weather condition names to a pleasantness score in `[0, 10]`.
///
/// Scores outside that range are accepted as given; the scorer never clamps.
///
/// # Examples
///
/// ```
/// use weather_pleasantness::PleasantnessConfig;
///
/// let config = PleasantnessConfig::from_yaml_str("conditions:\n  Clear: 9\n  Rain: 3\n").unwrap();
/// assert_eq!(config.condition_score("Clear"), 9.0);
/// // Unlisted conditions score 0
/// assert_eq!(config.condition_score("Snow"), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PleasantnessConfig {
    #[serde(default)]
    pub conditions: HashMap<String, f64>,
}

impl PleasantnessConfig {
    pub fn new(conditions: HashMap<String, f64>) -> Self {
        let config = Self { conditions };
        config.warn_out_of_range();
        config
    }

    /// Parses a YAML document with a top-level `conditions` mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseStr`] if the document is not valid YAML of that shape.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.warn_out_of_range();
        Ok(config)
    }

    /// Reads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config: Self = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        info!(
            "Loaded {} condition scores from {}",
            config.conditions.len(),
            path.display()
        );
        config.warn_out_of_range();
        Ok(config)
    }

    /// Score for `condition`, or [`UNKNOWN_CONDITION_SCORE`] when it is not listed.
    pub fn condition_score(&self, condition: &str) -> f64 {
        match self.conditions.get(condition) {
            Some(score) => *score,
            None => {
                debug!("Unknown weather condition '{}', scoring it as 0", condition);
                UNKNOWN_CONDITION_SCORE
            }
        }
    }

    fn warn_out_of_range(&self) {
        for (condition, score) in &self.conditions {
            if !(0.0..=10.0).contains(score) {
                warn!(
                    "Condition '{}' has score {} outside 0-10, using it as is",
                    condition, score
                );
            }
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PleasantnessConfig {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "conditions:")?;
        writeln!(file, "  Clear: 10")?;
        writeln!(file, "  Clouds: 7.5")?;
        writeln!(file, "  Thunderstorm: 0")?;

        let config = PleasantnessConfig::load(file.path())?;
        assert_eq!(config.conditions.len(), 3);
        assert_eq!(config.condition_score("Clouds"), 7.5);
        assert_eq!(config.condition_score("Thunderstorm"), 0.0);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let result = PleasantnessConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Read(p, _)) if p == path));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "conditions: [not, a, mapping]").unwrap();
        let result = PleasantnessConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_, _))));
    }

    #[test]
    fn test_malformed_yaml_str() {
        let result = PleasantnessConfig::from_yaml_str("conditions:\n  Clear: sunny\n");
        assert!(matches!(result, Err(ConfigError::ParseStr(_))));

        let result = PleasantnessConfig::from_yaml_str("conditions: [Clear, Rain]");
        assert!(matches!(result, Err(ConfigError::ParseStr(_))));
    }

    #[test]
    fn test_empty_document_has_no_conditions() {
        let config = PleasantnessConfig::from_yaml_str("{}").unwrap();
        assert!(config.conditions.is_empty());
        assert_eq!(config.condition_score("Clear"), UNKNOWN_CONDITION_SCORE);
    }

    #[test]
    fn test_out_of_range_scores_are_kept() {
        let config: PleasantnessConfig = [("Heatwave", 14.0), ("Hail", -3.0)]
            .into_iter()
            .collect();
        assert_eq!(config.condition_score("Heatwave"), 14.0);
        assert_eq!(config.condition_score("Hail"), -3.0);
    }

    #[test]
    fn test_condition_lookup_is_case_sensitive() {
        let config: PleasantnessConfig = [("Clear", 10.0)].into_iter().collect();
        assert_eq!(config.condition_score("clear"), UNKNOWN_CONDITION_SCORE);
    }
}
