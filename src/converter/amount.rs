//! Amount parsing, validation and display formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::catalog::Currency;
use crate::client::{ConversionError, ConversionPayload};

/// Decimal places shown for the converted amount.
pub const TARGET_AMOUNT_PRECISION: u32 = 3;

/// Parses user input. Anything that is not a decimal number counts as zero.
pub fn parse_amount(text: &str) -> Decimal {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Formats a converted amount with exactly three decimal places.
pub fn format_target_amount(amount: Decimal) -> String {
    let mut rounded = amount
        .round_dp_with_strategy(TARGET_AMOUNT_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(TARGET_AMOUNT_PRECISION);
    rounded.to_string()
}

/// Checks a payload against the request it answers and returns the
/// display string for the target amount.
pub fn validate_payload(
    payload: &ConversionPayload,
    source: Currency,
    target: Currency,
) -> Result<String, ConversionError> {
    if !payload.from_currency.eq_ignore_ascii_case(source.code()) {
        return Err(ConversionError::Decode(format!(
            "fromCurrency '{}' does not match requested {}",
            payload.from_currency, source
        )));
    }
    if !payload.to_currency.eq_ignore_ascii_case(target.code()) {
        return Err(ConversionError::Decode(format!(
            "toCurrency '{}' does not match requested {}",
            payload.to_currency, target
        )));
    }

    Decimal::from_str(payload.from_currency_amount.trim()).map_err(|e| {
        ConversionError::Decode(format!(
            "fromCurrencyAmount '{}': {e}",
            payload.from_currency_amount
        ))
    })?;
    let converted = Decimal::from_str(payload.to_currency_amount.trim()).map_err(|e| {
        ConversionError::Decode(format!(
            "toCurrencyAmount '{}': {e}",
            payload.to_currency_amount
        ))
    })?;

    Ok(format_target_amount(converted))
}
