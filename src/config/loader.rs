use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pokewalk/config.toml` on Unix/macOS, or the
    /// equivalent from `dirs::config_dir()` elsewhere. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pokewalk").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an http(s) URL
    /// - The catalog has at least one entry
    /// - A description language is set
    /// - The displacement threshold is positive
    /// - Both update intervals are non-zero
    /// - The fastest interval does not exceed the regular interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' must be an http(s) URL", self.api.base_url),
            });
        }

        if self.api.catalog_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.catalog_size must be at least 1".to_string(),
            });
        }

        if self.api.language.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.language must not be empty".to_string(),
            });
        }

        let threshold = self.location.min_displacement_meters;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "location.min_displacement_meters must be positive, got {}",
                    threshold
                ),
            });
        }

        if self.location.interval_ms == 0 || self.location.fastest_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "location.interval_ms ({}) and location.fastest_interval_ms ({}) must be non-zero",
                    self.location.interval_ms, self.location.fastest_interval_ms
                ),
            });
        }

        if self.location.fastest_interval_ms > self.location.interval_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "location.fastest_interval_ms ({}) exceeds location.interval_ms ({})",
                    self.location.fastest_interval_ms, self.location.interval_ms
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_catalog() {
        let mut config = Config::default();
        config.api.catalog_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_intervals() {
        let mut config = Config::default();
        config.location.fastest_interval_ms = 20_000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fastest_interval_ms"));
    }

    #[test]
    fn rejects_zero_interval() {
        let mut config = Config::default();
        config.location.interval_ms = 0;
        config.location.fastest_interval_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must be non-zero"));

        let mut config = Config::default();
        config.location.fastest_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let mut config = Config::default();
        config.location.min_displacement_meters = 0.0;
        assert!(config.validate().is_err());
    }
}
