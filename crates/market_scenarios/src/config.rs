//! Batch configuration management.
//!
//! Handles loading batch settings from TOML files and environment variables.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default number of curves handed to one rayon task.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default minimum batch length before work is spread across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Environment variable overriding [`BatchConfig::batch_size`].
pub const ENV_BATCH_SIZE: &str = "POINT_SHIFT_BATCH_SIZE";

/// Environment variable overriding [`BatchConfig::parallel_threshold`].
pub const ENV_PARALLEL_THRESHOLD: &str = "POINT_SHIFT_PARALLEL_THRESHOLD";

/// Configuration error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Batch size must be positive.
    #[error("Invalid batch size: {0}. Must be at least 1")]
    InvalidBatchSize(usize),

    /// The configuration file could not be read.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// The configuration file is not valid TOML for this structure.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// An environment variable held an unusable value.
    #[error("Environment variable {var} has invalid value '{value}'")]
    EnvError {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },
}

/// Configuration for applying perturbations to many curves at once.
///
/// # Example
///
/// ```
/// use market_scenarios::BatchConfig;
///
/// let config = BatchConfig::from_toml_str("parallel_threshold = 8").unwrap();
/// assert_eq!(config.parallel_threshold, 8);
/// assert!(config.should_parallelize(8));
/// assert!(!config.should_parallelize(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Minimum number of items per rayon task
    pub batch_size: usize,
    /// Minimum number of items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BatchConfig {
    /// Creates a new batch configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never parallelises.
    pub fn sequential() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BatchConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Defaults overridden by environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_override()
    }

    /// Apply environment variable overrides.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BATCH_SIZE) {
            self.batch_size = parse_env(ENV_BATCH_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_PARALLEL_THRESHOLD) {
            self.parallel_threshold = parse_env(ENV_PARALLEL_THRESHOLD, &value)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }
}

fn parse_env(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::EnvError {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_default() {
        let config = BatchConfig::default();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_clamps_batch_size() {
        assert_eq!(BatchConfig::new(0, 10).batch_size, 1);
    }

    #[test]
    fn test_sequential_never_parallelizes() {
        assert!(!BatchConfig::sequential().should_parallelize(1_000_000));
    }

    #[test]
    fn test_from_toml_full() {
        let config = BatchConfig::from_toml_str("batch_size = 16\nparallel_threshold = 32").unwrap();
        assert_eq!(config, BatchConfig::new(16, 32));
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = BatchConfig::from_toml_str("batch_size = 8").unwrap();
        assert_eq!(config.batch_size, 8);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_from_toml_zero_batch_size() {
        assert_eq!(
            BatchConfig::from_toml_str("batch_size = 0"),
            Err(ConfigError::InvalidBatchSize(0))
        );
    }

    #[test]
    fn test_from_toml_unknown_field() {
        assert!(matches!(
            BatchConfig::from_toml_str("threads = 4"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let result = BatchConfig::from_file(Path::new("/nonexistent/point_shift.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let config = BatchConfig::default()
            .with_overrides(lookup_from(&[
                (ENV_BATCH_SIZE, "4"),
                (ENV_PARALLEL_THRESHOLD, " 12 "),
            ]))
            .unwrap();
        assert_eq!(config, BatchConfig::new(4, 12));
    }

    #[test]
    fn test_env_override_invalid_value() {
        let result =
            BatchConfig::default().with_overrides(lookup_from(&[(ENV_PARALLEL_THRESHOLD, "many")]));
        assert_eq!(
            result,
            Err(ConfigError::EnvError {
                var: ENV_PARALLEL_THRESHOLD,
                value: "many".to_string(),
            })
        );
    }

    #[test]
    fn test_env_override_zero_batch_size() {
        let result = BatchConfig::default().with_overrides(lookup_from(&[(ENV_BATCH_SIZE, "0")]));
        assert_eq!(result, Err(ConfigError::InvalidBatchSize(0)));
    }
}
