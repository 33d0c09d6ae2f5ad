use async_trait::async_trait;
use reqwest::{Client, Url};
use rust_decimal::Decimal;
use std::time::Duration;

use crate::catalog::Currency;
use crate::client::{ConversionClient, ConversionError, ConversionPayload};
use crate::config::ServiceConfig;

/// Conversion client backed by `GET {base_url}/convert`.
pub struct HttpConversionClient {
    client: Client,
    base_url: String,
}

impl HttpConversionClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ConversionError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|e| ConversionError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Builds the request URL. Fails only when `base_url` itself is unusable.
    pub fn request_url(
        &self,
        source: Currency,
        amount: Decimal,
        target: Currency,
    ) -> Result<Url, ConversionError> {
        let endpoint = format!("{}/convert", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&endpoint)
            .map_err(|e| ConversionError::InvalidRequest(format!("{endpoint}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConversionError::InvalidRequest(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        url.query_pairs_mut()
            .append_pair("from", source.code())
            .append_pair("amount", &amount.normalize().to_string())
            .append_pair("to", target.code());
        Ok(url)
    }
}

#[async_trait]
impl ConversionClient for HttpConversionClient {
    async fn convert(
        &self,
        source: Currency,
        amount: Decimal,
        target: Currency,
    ) -> Result<ConversionPayload, ConversionError> {
        let url = self.request_url(source, amount, target)?;
        tracing::debug!(%url, "Requesting conversion");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ConversionError::Server(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConversionError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ConversionError::Server(format!("Failed to read response body: {e}")))?;

        serde_json::from_slice(&body).map_err(|e| ConversionError::Decode(e.to_string()))
    }
}
