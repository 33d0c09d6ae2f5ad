//! Intents for the conversion state reducer.

use crate::catalog::{Currency, Role};
use crate::ui::mvi::Intent;

/// State transitions the orchestrator can request.
///
/// Timers and requests are not modelled here; the orchestrator performs
/// them around the dispatch call.
#[derive(Debug, Clone)]
pub enum ConverterIntent {
    /// User edited the amount text.
    EditAmount { text: String },

    /// User picked a currency for a role. Picking the other role's
    /// currency swaps the pair instead.
    Select { role: Role, currency: Currency },

    /// Exchange source and target.
    Swap,

    /// Refresh with nothing to convert: drop the target amount.
    Clear,

    /// A request was issued.
    RequestIssued,

    /// Latest request resolved with a formatted target amount.
    ConversionSucceeded { target_amount: String },

    /// Latest request failed. Target amount is kept.
    ConversionFailed { message: String },
}

impl Intent for ConverterIntent {}
