//! Currency conversion with debounced input, periodic refresh and
//! last-issued-wins request handling, plus a terminal front end.

pub mod catalog;
pub mod client;
pub mod config;
pub mod converter;
pub mod logging;
pub mod shutdown;
pub mod ui;

use std::sync::Arc;
use std::time::Duration;

use crate::client::{
    ConversionClient, ConversionError, HttpConversionClient, OfflineConversionClient,
};
use crate::config::{ServiceConfig, ServiceMode};

/// Build the conversion client selected by configuration.
pub fn build_client(config: &ServiceConfig) -> Result<Arc<dyn ConversionClient>, ConversionError> {
    let client: Arc<dyn ConversionClient> = match config.mode {
        ServiceMode::Offline => Arc::new(OfflineConversionClient::new(Duration::from_millis(
            config.offline_latency_ms,
        ))),
        ServiceMode::Http => Arc::new(HttpConversionClient::new(config)?),
    };
    Ok(client)
}
