//! Conversion service contract.
//!
//! The orchestrator only ever talks to a [`ConversionClient`]; the concrete
//! client is picked from configuration at startup.

pub mod http;
pub mod offline;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Currency;

pub use http::HttpConversionClient;
pub use offline::OfflineConversionClient;

/// Message shown when the request could not even be built.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Message shown when the service failed or answered with garbage.
pub const UNAVAILABLE_MESSAGE: &str =
    "We can't make this conversion right now. Please try again later.";

/// Raw conversion answer. Amounts stay strings on the wire to avoid float
/// precision loss in transit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPayload {
    pub from_currency: String,
    pub from_currency_amount: String,
    pub to_currency: String,
    pub to_currency_amount: String,
}

/// Errors a conversion attempt can end with. All of them are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Request could not be constructed (bad base URL and the like).
    #[error("Invalid conversion request: {0}")]
    InvalidRequest(String),

    /// Transport failure or timeout.
    #[error("Conversion service unreachable: {0}")]
    Server(String),

    /// Service answered with a non-success status.
    #[error("Conversion service error: {status}")]
    Status { status: u16 },

    /// Payload shape or content did not match the request.
    #[error("Malformed conversion payload: {0}")]
    Decode(String),
}

impl ConversionError {
    /// User-facing text published in the error line.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConversionError::InvalidRequest(_) => GENERIC_FAILURE_MESSAGE,
            ConversionError::Server(_)
            | ConversionError::Status { .. }
            | ConversionError::Decode(_) => UNAVAILABLE_MESSAGE,
        }
    }

    /// Diagnostic tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::InvalidRequest(_) => "invalid_request",
            ConversionError::Server(_) => "server_error",
            ConversionError::Status { .. } => "server_status",
            ConversionError::Decode(_) => "decode_error",
        }
    }
}

/// One asynchronous conversion attempt. Implementations must not retry;
/// retrying is driven by the orchestrator's debounce and poll timers.
#[async_trait]
pub trait ConversionClient: Send + Sync {
    async fn convert(
        &self,
        source: Currency,
        amount: Decimal,
        target: Currency,
    ) -> Result<ConversionPayload, ConversionError>;
}
