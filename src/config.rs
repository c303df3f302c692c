//! Study configuration, read from a small YAML file.
//!
//! ```yaml
//! shuffle: true
//! seed: 42
//! show-diagrams: true
//! ```
//!
//! Every key is optional. Unknown keys are rejected so a typo does not
//! silently fall back to a default.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{FretcardsError, Result};

/// Raw file contents, every field optional
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawStudyConfig {
    shuffle: Option<bool>,
    seed: Option<u64>,
    show_diagrams: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyConfig {
    /// Shuffle the session's copy of the deck
    pub shuffle: bool,
    /// Fixed shuffle seed for a reproducible order
    pub seed: Option<u64>,
    /// Draw diagram answers; when off only the answer text is shown
    pub show_diagrams: bool,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            shuffle: true,
            seed: None,
            show_diagrams: true,
        }
    }
}

impl StudyConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawStudyConfig =
            serde_yaml::from_str(content).map_err(|e| FretcardsError::ConfigError(e.to_string()))?;
        let defaults = Self::default();

        Ok(Self {
            shuffle: raw.shuffle.unwrap_or(defaults.shuffle),
            seed: raw.seed,
            show_diagrams: raw.show_diagrams.unwrap_or(defaults.show_diagrams),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded study config");
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(StudyConfig::from_yaml("").unwrap(), StudyConfig::default());
        assert_eq!(
            StudyConfig::from_yaml("seed: 3\n").unwrap(),
            StudyConfig {
                shuffle: true,
                seed: Some(3),
                show_diagrams: true,
            }
        );
    }

    #[test]
    fn test_all_keys() {
        let config = StudyConfig::from_yaml("shuffle: false\nseed: 11\nshow-diagrams: false\n").unwrap();
        assert!(!config.shuffle);
        assert_eq!(config.seed, Some(11));
        assert!(!config.show_diagrams);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = StudyConfig::from_yaml("shufle: true\n").unwrap_err();
        assert!(matches!(err, FretcardsError::ConfigError(_)));
        assert!(err.to_string().starts_with("Invalid configuration:"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(StudyConfig::from_yaml("seed: lots\n").is_err());
    }
}
