//! Rundomizer configuration management.
//!
//! Loads `rundomizer.toml` with environment variable overrides:
//! `RUNDOMIZER_POLICY`, `RUNDOMIZER_SEED`, `RUNDOMIZER_DICTIONARY` and
//! `RUNDOMIZER_LOG_LEVEL`.

use std::path::{Path, PathBuf};

use rundomizer_core::sampler::BiasPolicy;
use serde::Deserialize;
use thiserror::Error;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Rundomizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RundomizerConfig {
    /// Mapping from raw entropy to the target range
    #[serde(default)]
    pub policy: BiasPolicy,

    /// Seed for reproducible runs; the OS CSPRNG is used when absent
    pub seed: Option<u64>,

    /// Dictionary file replacing the built-in tables
    pub dictionary: Option<PathBuf>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RundomizerConfig {
    fn default() -> Self {
        Self {
            policy: BiasPolicy::default(),
            seed: None,
            dictionary: None,
            log_level: default_log_level(),
        }
    }
}

impl RundomizerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup("RUNDOMIZER_POLICY") {
            self.policy = policy.parse().unwrap_or(self.policy);
        }

        if let Some(seed) = lookup("RUNDOMIZER_SEED") {
            self.seed = seed.trim().parse().ok().or(self.seed);
        }

        if let Some(dictionary) = lookup("RUNDOMIZER_DICTIONARY") {
            self.dictionary = Some(PathBuf::from(dictionary));
        }

        if let Some(log_level) = lookup("RUNDOMIZER_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Some(dictionary) = &self.dictionary {
            if dictionary.as_os_str().is_empty() {
                errors.push("dictionary path cannot be empty".to_string());
            } else if !dictionary.is_file() {
                errors.push(format!(
                    "dictionary file '{}' does not exist",
                    dictionary.display()
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = RundomizerConfig::default();
        assert_eq!(config.policy, BiasPolicy::Modulo);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = RundomizerConfig::from_toml_str("policy = \"rejection\"\nseed = 42").unwrap();
        assert_eq!(config.policy, BiasPolicy::Rejection);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = RundomizerConfig::from_toml_str("polcy = \"rejection\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let config = RundomizerConfig::default().with_overrides(lookup(&[
            ("RUNDOMIZER_POLICY", "Rejection"),
            ("RUNDOMIZER_SEED", " 7 "),
            ("RUNDOMIZER_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.policy, BiasPolicy::Rejection);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_overrides_keep_values() {
        let mut base = RundomizerConfig::default();
        base.seed = Some(3);
        let config = base.with_overrides(lookup(&[
            ("RUNDOMIZER_POLICY", "fair"),
            ("RUNDOMIZER_SEED", "abc"),
        ]));
        assert_eq!(config.policy, BiasPolicy::Modulo);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_validate_collects_errors() {
        let config = RundomizerConfig {
            log_level: "loud".to_string(),
            dictionary: Some(PathBuf::from("/nonexistent/dictionary.toml")),
            ..RundomizerConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("log_level"));
                assert!(errors[1].contains("dictionary"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_log_levels_case_insensitive() {
        for level in ["trace", "INFO", "Warn", "error"] {
            let config = RundomizerConfig {
                log_level: level.to_string(),
                ..RundomizerConfig::default()
            };
            assert!(config.validate().is_ok(), "'{}' should be valid", level);
        }
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config =
            RundomizerConfig::load_or_default(Path::new("/nonexistent/rundomizer.toml")).unwrap();
        assert_eq!(config, RundomizerConfig::default());
    }
}
