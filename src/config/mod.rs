mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ConverterConfig, LoggingConfig, ServiceConfig, ServiceMode};
