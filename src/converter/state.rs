use rust_decimal::Decimal;

use crate::catalog::{Currency, Role};
use crate::ui::mvi::UiState;

/// Published conversion state.
///
/// Owned by the orchestrator; the UI only ever sees snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    pub source: Currency,
    pub target: Currency,
    /// Raw text the user typed.
    pub amount_text: String,
    /// `amount_text` parsed; zero when unparsable.
    pub amount: Decimal,
    /// Formatted converted amount, empty when there is none.
    pub target_amount: String,
    /// True while the latest issued request is in flight.
    pub loading: bool,
    /// User-facing error, empty when there is none.
    pub error: String,
    pub swap_visible: bool,
}

/// Coarse lifecycle of a conversion session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPhase {
    /// Amount is zero or less; nothing to convert.
    Idle,
    /// A request is in flight.
    Pending,
    /// Last request resolved, successfully or not.
    Settled,
}

/// One side of the pair as the UI renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPanel {
    pub role: Role,
    pub currency: Currency,
    pub amount: String,
}

impl ConverterState {
    pub fn new(source: Currency, target: Currency) -> Self {
        Self {
            source,
            target,
            amount_text: String::new(),
            amount: Decimal::ZERO,
            target_amount: String::new(),
            loading: false,
            error: String::new(),
            swap_visible: true,
        }
    }

    pub fn currency(&self, role: Role) -> Currency {
        match role {
            Role::Source => self.source,
            Role::Target => self.target,
        }
    }

    pub fn panel(&self, role: Role) -> CurrencyPanel {
        let amount = match role {
            Role::Source => self.amount_text.clone(),
            Role::Target => self.target_amount.clone(),
        };
        CurrencyPanel {
            role,
            currency: self.currency(role),
            amount,
        }
    }

    pub fn phase(&self) -> ConversionPhase {
        if self.amount <= Decimal::ZERO {
            ConversionPhase::Idle
        } else if self.loading {
            ConversionPhase::Pending
        } else {
            ConversionPhase::Settled
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(Currency::Usd, Currency::Eur)
    }
}

impl UiState for ConverterState {}
