mod common;

use common::temp_config;
use currency_converter::catalog::Currency;
use currency_converter::config::{Config, ConfigError, ServiceMode};
use std::path::PathBuf;
use std::time::Duration;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.service.mode, ServiceMode::Offline);
    assert_eq!(config.service.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.service.timeout_seconds, 10);
    assert_eq!(config.service.connect_timeout_seconds, 5);
    assert_eq!(config.service.offline_latency_ms, 300);

    assert_eq!(config.converter.source, Currency::Usd);
    assert_eq!(config.converter.target, Currency::Eur);
    assert_eq!(config.converter.debounce(), Duration::from_millis(500));
    assert_eq!(config.converter.poll_interval(), Duration::from_secs(10));

    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("currency-converter/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = temp_config(
        r#"
[service]
mode = "http"
base_url = "https://rates.example.com/api"
timeout_seconds = 3
connect_timeout_seconds = 1

[converter]
source = "GBP"
target = "JPY"
debounce_ms = 250
poll_interval_seconds = 30

[logging]
level = "debug"
file = "/tmp/converter.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.service.mode, ServiceMode::Http);
    assert_eq!(config.service.base_url, "https://rates.example.com/api");
    assert_eq!(config.service.timeout_seconds, 3);
    assert_eq!(config.service.connect_timeout_seconds, 1);
    assert_eq!(config.converter.source, Currency::Gbp);
    assert_eq!(config.converter.target, Currency::Jpy);
    assert_eq!(config.converter.debounce_ms, 250);
    assert_eq!(config.converter.poll_interval_seconds, 30);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file_path(),
        PathBuf::from("/tmp/converter.log")
    );
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[converter]
target = "UAH"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.converter.source, Currency::Usd);
    assert_eq!(config.converter.target, Currency::Uah);
    assert_eq!(config.converter.debounce_ms, 500);
    assert_eq!(config.service, Config::default().service);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[converter\nsource = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_unknown_currency_is_parse_error() {
    let (_dir, path) = temp_config(
        r#"
[converter]
source = "XYZ"
"#,
    );

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_same_currencies_fail_validation() {
    let (_dir, path) = temp_config(
        r#"
[converter]
source = "EUR"
target = "EUR"
"#,
    );

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_zero_poll_interval_fails_validation() {
    let (_dir, path) = temp_config(
        r#"
[converter]
poll_interval_seconds = 0
"#,
    );

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_http_mode_with_relative_url_fails_validation() {
    let (_dir, path) = temp_config(
        r#"
[service]
mode = "http"
base_url = "rates.example.com"
"#,
    );

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("absolute http(s) URL"));
}

#[test]
fn test_default_log_file_lives_under_app_dir() {
    let path = Config::default().logging.file_path();
    assert!(path.ends_with("currency-converter/currency-converter.log"));
}
