//! Reducer for the conversion state.

use crate::catalog::Role;
use crate::converter::amount::parse_amount;
use crate::ui::mvi::Reducer;

use super::intent::ConverterIntent;
use super::state::ConverterState;

/// Pure state transitions for [`ConverterState`].
pub struct ConverterReducer;

impl Reducer for ConverterReducer {
    type State = ConverterState;
    type Intent = ConverterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConverterIntent::EditAmount { text } => ConverterState {
                amount: parse_amount(&text),
                amount_text: text,
                ..state
            },

            ConverterIntent::Select { role, currency } => {
                if state.currency(role.other()) == currency {
                    return Self::reduce(state, ConverterIntent::Swap);
                }
                let mut next = state;
                match role {
                    Role::Source => next.source = currency,
                    Role::Target => next.target = currency,
                }
                next
            }

            ConverterIntent::Swap => ConverterState {
                source: state.target,
                target: state.source,
                ..state
            },

            ConverterIntent::Clear => ConverterState {
                target_amount: String::new(),
                error: String::new(),
                loading: false,
                swap_visible: true,
                ..state
            },

            // Error stays visible until a request succeeds.
            ConverterIntent::RequestIssued => ConverterState {
                loading: true,
                swap_visible: false,
                ..state
            },

            ConverterIntent::ConversionSucceeded { target_amount } => ConverterState {
                target_amount,
                error: String::new(),
                loading: false,
                swap_visible: true,
                ..state
            },

            ConverterIntent::ConversionFailed { message } => ConverterState {
                error: message,
                loading: false,
                swap_visible: true,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Currency;
    use rust_decimal::Decimal;

    #[test]
    fn edit_amount_parses_text() {
        let state = ConverterReducer::reduce(
            ConverterState::default(),
            ConverterIntent::EditAmount {
                text: "42.5".to_string(),
            },
        );
        assert_eq!(state.amount_text, "42.5");
        assert_eq!(state.amount, Decimal::new(425, 1));
    }

    #[test]
    fn edit_amount_with_garbage_is_zero() {
        let state = ConverterReducer::reduce(
            ConverterState::default(),
            ConverterIntent::EditAmount {
                text: "12a".to_string(),
            },
        );
        assert_eq!(state.amount_text, "12a");
        assert_eq!(state.amount, Decimal::ZERO);
    }

    #[test]
    fn select_distinct_currency_assigns_role() {
        let state = ConverterReducer::reduce(
            ConverterState::default(),
            ConverterIntent::Select {
                role: Role::Target,
                currency: Currency::Gbp,
            },
        );
        assert_eq!(state.source, Currency::Usd);
        assert_eq!(state.target, Currency::Gbp);
    }

    #[test]
    fn select_other_roles_currency_swaps() {
        let state = ConverterReducer::reduce(
            ConverterState::default(),
            ConverterIntent::Select {
                role: Role::Source,
                currency: Currency::Eur,
            },
        );
        assert_eq!(state.source, Currency::Eur);
        assert_eq!(state.target, Currency::Usd);
    }

    #[test]
    fn select_source_currency_as_target_swaps() {
        let state = ConverterReducer::reduce(
            ConverterState::default(),
            ConverterIntent::Select {
                role: Role::Target,
                currency: Currency::Usd,
            },
        );
        assert_eq!(state.source, Currency::Eur);
        assert_eq!(state.target, Currency::Usd);
    }

    #[test]
    fn select_same_roles_currency_keeps_pair() {
        let state = ConverterReducer::reduce(
            ConverterState::default(),
            ConverterIntent::Select {
                role: Role::Source,
                currency: Currency::Usd,
            },
        );
        assert_eq!(state.source, Currency::Usd);
        assert_eq!(state.target, Currency::Eur);
    }

    #[test]
    fn swap_twice_restores_pair() {
        let once = ConverterReducer::reduce(ConverterState::default(), ConverterIntent::Swap);
        assert_eq!((once.source, once.target), (Currency::Eur, Currency::Usd));
        let twice = ConverterReducer::reduce(once, ConverterIntent::Swap);
        assert_eq!((twice.source, twice.target), (Currency::Usd, Currency::Eur));
    }

    #[test]
    fn request_issued_keeps_previous_error() {
        let mut state = ConverterState::default();
        state.error = "boom".to_string();
        let state = ConverterReducer::reduce(state, ConverterIntent::RequestIssued);
        assert!(state.loading);
        assert!(!state.swap_visible);
        assert_eq!(state.error, "boom");
    }

    #[test]
    fn success_clears_error_and_loading() {
        let mut state = ConverterState::default();
        state.error = "boom".to_string();
        state.loading = true;
        state.swap_visible = false;
        let state = ConverterReducer::reduce(
            state,
            ConverterIntent::ConversionSucceeded {
                target_amount: "91.500".to_string(),
            },
        );
        assert_eq!(state.target_amount, "91.500");
        assert!(state.error.is_empty());
        assert!(!state.loading);
        assert!(state.swap_visible);
    }

    #[test]
    fn failure_keeps_target_amount() {
        let mut state = ConverterState::default();
        state.target_amount = "91.500".to_string();
        state.loading = true;
        let state = ConverterReducer::reduce(
            state,
            ConverterIntent::ConversionFailed {
                message: "unavailable".to_string(),
            },
        );
        assert_eq!(state.target_amount, "91.500");
        assert_eq!(state.error, "unavailable");
        assert!(!state.loading);
    }

    #[test]
    fn clear_empties_target_and_error() {
        let mut state = ConverterState::default();
        state.target_amount = "91.500".to_string();
        state.error = "boom".to_string();
        state.loading = true;
        let state = ConverterReducer::reduce(state, ConverterIntent::Clear);
        assert!(state.target_amount.is_empty());
        assert!(state.error.is_empty());
        assert!(!state.loading);
    }
}
