use crate::catalog::{Currency, Role};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PickerIntent {
    /// Show the currency list for `role`, highlighting its current currency.
    Open { role: Role, current: Currency },
    Close,
    MoveUp,
    MoveDown,
}

impl Intent for PickerIntent {}
