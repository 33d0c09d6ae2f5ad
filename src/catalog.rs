//! Supported currencies and the two conversion roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A currency the converter can quote.
///
/// The set is closed; ordering follows declaration order and is the order
/// the picker lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Chf,
    Cad,
    Aud,
    Cny,
    Sek,
    Nok,
    Pln,
    Uah,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown currency code '{0}'")]
pub struct UnknownCurrency(pub String);

impl Currency {
    pub const ALL: [Currency; 12] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Chf,
        Currency::Cad,
        Currency::Aud,
        Currency::Cny,
        Currency::Sek,
        Currency::Nok,
        Currency::Pln,
        Currency::Uah,
    ];

    /// ISO 4217 code, e.g. "USD".
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Chf => "CHF",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Cny => "CNY",
            Currency::Sek => "SEK",
            Currency::Nok => "NOK",
            Currency::Pln => "PLN",
            Currency::Uah => "UAH",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Jpy => "Japanese Yen",
            Currency::Chf => "Swiss Franc",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
            Currency::Cny => "Chinese Yuan",
            Currency::Sek => "Swedish Krona",
            Currency::Nok => "Norwegian Krone",
            Currency::Pln => "Polish Zloty",
            Currency::Uah => "Ukrainian Hryvnia",
        }
    }

    /// Icon reference rendered next to the code (a flag glyph).
    pub fn icon(self) -> &'static str {
        match self {
            Currency::Usd => "🇺🇸",
            Currency::Eur => "🇪🇺",
            Currency::Gbp => "🇬🇧",
            Currency::Jpy => "🇯🇵",
            Currency::Chf => "🇨🇭",
            Currency::Cad => "🇨🇦",
            Currency::Aud => "🇦🇺",
            Currency::Cny => "🇨🇳",
            Currency::Sek => "🇸🇪",
            Currency::Nok => "🇳🇴",
            Currency::Pln => "🇵🇱",
            Currency::Uah => "🇺🇦",
        }
    }

    /// Position in [`Currency::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|currency| *currency == self)
            .unwrap_or(0)
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

/// Which side of the conversion pair a currency occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Source,
    Target,
}

impl Role {
    pub fn other(self) -> Role {
        match self {
            Role::Source => Role::Target,
            Role::Target => Role::Source,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Role::Source => "YOU PAY",
            Role::Target => "YOU GET",
        }
    }

    /// Only the source amount is typed by the user.
    pub fn is_editable(self) -> bool {
        matches!(self, Role::Source)
    }

    pub fn placeholder(self) -> &'static str {
        "0"
    }
}
