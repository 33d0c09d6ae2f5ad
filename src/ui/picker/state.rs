use crate::catalog::{Currency, Role};
use crate::ui::mvi::UiState;

/// Currency list dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    Visible {
        /// Role the chosen currency will be assigned to.
        role: Role,
        /// Index into `Currency::ALL`.
        highlighted: usize,
    },
}

impl UiState for PickerState {}

impl PickerState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Role and currency under the cursor, if the dialog is open.
    pub fn selection(&self) -> Option<(Role, Currency)> {
        match self {
            Self::Hidden => None,
            Self::Visible { role, highlighted } => {
                Currency::ALL.get(*highlighted).map(|currency| (*role, *currency))
            }
        }
    }
}
