use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, ServiceMode};

/// Upper bound for `converter.debounce_ms` (one minute).
const MAX_DEBOUNCE_MS: u64 = 60_000;
/// Upper bound for `converter.poll_interval_seconds` (one day).
const MAX_POLL_INTERVAL_SECONDS: u64 = 86_400;

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
    /// Uses `~/.config/currency-converter/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("currency-converter").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

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
    /// - Source and target currencies differ
    /// - Debounce and poll intervals are non-zero
    /// - Timeouts are non-zero
    /// - The service URL is absolute http(s) when the HTTP client is used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.converter.source == self.converter.target {
            return Err(validation(format!(
                "Source and target currency must differ (both are {})",
                self.converter.source
            )));
        }

        if self.converter.debounce_ms == 0 || self.converter.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(validation(format!(
                "debounce_ms must be between 1 and {MAX_DEBOUNCE_MS}"
            )));
        }

        if self.converter.poll_interval_seconds == 0
            || self.converter.poll_interval_seconds > MAX_POLL_INTERVAL_SECONDS
        {
            return Err(validation(format!(
                "poll_interval_seconds must be between 1 and {MAX_POLL_INTERVAL_SECONDS}"
            )));
        }

        if self.service.timeout_seconds == 0 || self.service.connect_timeout_seconds == 0 {
            return Err(validation("Service timeouts must be greater than zero"));
        }

        if self.service.mode == ServiceMode::Http {
            let base_url = self.service.base_url.trim();
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(validation(format!(
                    "Service base_url '{}' must be an absolute http(s) URL",
                    self.service.base_url
                )));
            }
        }

        Ok(())
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
