use crate::catalog::Role;
use crate::converter::{ConverterCommand, ConverterState};
use crate::ui::mvi::Reducer;
use crate::ui::picker::{PickerIntent, PickerReducer, PickerState};

/// Longest amount the input field accepts.
const MAX_AMOUNT_LEN: usize = 15;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Presentation-side state: what the terminal shows and what the user is
/// typing. Conversion state itself lives in the orchestrator; the app only
/// keeps the latest snapshot.
pub struct App {
    should_quit: bool,
    amount_input: String,
    converter: ConverterState,
    picker: PickerState,
}

impl App {
    pub fn new(converter: ConverterState) -> Self {
        Self {
            should_quit: false,
            amount_input: converter.amount_text.clone(),
            converter,
            picker: PickerState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn converter(&self) -> &ConverterState {
        &self.converter
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    /// Store a freshly published snapshot.
    pub fn on_state(&mut self, state: ConverterState) {
        self.converter = state;
    }

    /// Append a typed character. Returns the command to forward when the
    /// text actually changed.
    pub fn push_amount_char(&mut self, ch: char) -> Option<ConverterCommand> {
        if self.amount_input.chars().count() >= MAX_AMOUNT_LEN {
            return None;
        }
        let accepted = match ch {
            '0'..='9' => true,
            '.' | ',' => !self.amount_input.contains(['.', ',']),
            _ => false,
        };
        if !accepted {
            return None;
        }
        self.amount_input.push(ch);
        Some(self.amount_command())
    }

    pub fn pop_amount_char(&mut self) -> Option<ConverterCommand> {
        self.amount_input.pop()?;
        Some(self.amount_command())
    }

    pub fn clear_amount(&mut self) -> Option<ConverterCommand> {
        if self.amount_input.is_empty() {
            return None;
        }
        self.amount_input.clear();
        Some(self.amount_command())
    }

    fn amount_command(&self) -> ConverterCommand {
        ConverterCommand::AmountChanged {
            text: self.amount_input.clone(),
        }
    }

    /// The swap control is hidden while a request is in flight.
    pub fn request_swap(&self) -> Option<ConverterCommand> {
        self.converter
            .swap_visible
            .then_some(ConverterCommand::SwapRequested)
    }

    pub fn open_picker(&mut self, role: Role) {
        let current = self.converter.currency(role);
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Open { role, current });
    }

    pub fn close_picker(&mut self) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Close);
    }

    pub fn move_picker_up(&mut self) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::MoveUp);
    }

    pub fn move_picker_down(&mut self) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::MoveDown);
    }

    /// Choose the highlighted currency and close the list.
    pub fn confirm_picker(&mut self) -> Option<ConverterCommand> {
        let (role, currency) = self.picker.selection()?;
        self.close_picker();
        Some(ConverterCommand::CurrencySelected { role, currency })
    }
}
