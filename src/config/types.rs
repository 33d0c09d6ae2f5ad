use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::Currency;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which conversion client backs the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    /// Built-in rate table, no network.
    #[default]
    Offline,
    /// Remote conversion service at `base_url`.
    Http,
}

/// Conversion service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub mode: ServiceMode,
    /// Base URL of the conversion service (e.g., "https://rates.example.com/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Simulated latency of the offline client (default: 300).
    #[serde(default = "default_offline_latency_ms")]
    pub offline_latency_ms: u64,
}

/// Orchestrator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Currency selected as source at startup.
    #[serde(default = "default_source")]
    pub source: Currency,
    /// Currency selected as target at startup.
    #[serde(default = "default_target")]
    pub target: Currency,
    /// Quiet period after the last amount edit before converting (default: 500).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Interval of the background refresh (default: 10).
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to the platform data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_offline_latency_ms() -> u64 {
    300
}

fn default_source() -> Currency {
    Currency::Usd
}

fn default_target() -> Currency {
    Currency::Eur
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_poll_interval() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mode: ServiceMode::default(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            offline_latency_ms: default_offline_latency_ms(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
            debounce_ms: default_debounce_ms(),
            poll_interval_seconds: default_poll_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl ConverterConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }
}

impl LoggingConfig {
    /// Resolved log file path for the interactive UI.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir
                .join("currency-converter")
                .join("currency-converter.log")
        })
    }
}
