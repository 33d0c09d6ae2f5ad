use async_trait::async_trait;
use rust_decimal::{Decimal, RoundingStrategy};
use std::time::Duration;

use crate::catalog::Currency;
use crate::client::{ConversionClient, ConversionError, ConversionPayload};

/// Conversion client that answers from a built-in rate table.
///
/// Used when no conversion service is configured. A fixed delay stands in
/// for network latency so the loading state stays visible.
pub struct OfflineConversionClient {
    latency: Duration,
}

impl OfflineConversionClient {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Units of `currency` per one US dollar.
    pub fn rate(currency: Currency) -> Decimal {
        match currency {
            Currency::Usd => Decimal::ONE,
            Currency::Eur => Decimal::new(915, 3),
            Currency::Gbp => Decimal::new(790, 3),
            Currency::Jpy => Decimal::new(14950, 2),
            Currency::Chf => Decimal::new(880, 3),
            Currency::Cad => Decimal::new(136, 2),
            Currency::Aud => Decimal::new(152, 2),
            Currency::Cny => Decimal::new(724, 2),
            Currency::Sek => Decimal::new(1045, 2),
            Currency::Nok => Decimal::new(1070, 2),
            Currency::Pln => Decimal::new(398, 2),
            Currency::Uah => Decimal::new(4120, 2),
        }
    }

    pub fn quote(source: Currency, amount: Decimal, target: Currency) -> Decimal {
        let converted = amount / Self::rate(source) * Self::rate(target);
        converted.round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl Default for OfflineConversionClient {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

#[async_trait]
impl ConversionClient for OfflineConversionClient {
    async fn convert(
        &self,
        source: Currency,
        amount: Decimal,
        target: Currency,
    ) -> Result<ConversionPayload, ConversionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let converted = Self::quote(source, amount, target);
        Ok(ConversionPayload {
            from_currency: source.code().to_string(),
            from_currency_amount: amount.normalize().to_string(),
            to_currency: target.code().to_string(),
            to_currency_amount: converted.normalize().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_currency_is_identity() {
        let amount = Decimal::new(12345, 2);
        assert_eq!(
            OfflineConversionClient::quote(Currency::Eur, amount, Currency::Eur),
            amount
        );
    }

    #[test]
    fn usd_to_eur_uses_table_rate() {
        let quote = OfflineConversionClient::quote(Currency::Usd, Decimal::from(100), Currency::Eur);
        assert_eq!(quote, Decimal::new(915, 1));
    }

    #[tokio::test]
    async fn convert_echoes_request_in_payload() {
        let client = OfflineConversionClient::new(Duration::ZERO);
        let payload = client
            .convert(Currency::Usd, Decimal::from(100), Currency::Eur)
            .await
            .unwrap();
        assert_eq!(payload.from_currency, "USD");
        assert_eq!(payload.from_currency_amount, "100");
        assert_eq!(payload.to_currency, "EUR");
        assert_eq!(payload.to_currency_amount, "91.5");
    }
}
