use crate::catalog::Role;
use crate::converter::ConverterCommand;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Forward a command to the orchestrator.
    Forward(ConverterCommand),
}

impl From<Option<ConverterCommand>> for InputAction {
    fn from(command: Option<ConverterCommand>) -> Self {
        command.map_or(InputAction::None, InputAction::Forward)
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return InputAction::None;
    }

    if app.picker().is_visible() {
        return match key.code {
            KeyCode::Esc => {
                app.close_picker();
                InputAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.move_picker_up();
                InputAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.move_picker_down();
                InputAction::None
            }
            KeyCode::Enter => app.confirm_picker().into(),
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.request_quit();
            InputAction::None
        }
        KeyCode::Char('f') => {
            app.open_picker(Role::Source);
            InputAction::None
        }
        KeyCode::Char('t') => {
            app.open_picker(Role::Target);
            InputAction::None
        }
        KeyCode::Char('s') | KeyCode::Tab => app.request_swap().into(),
        KeyCode::Backspace => app.pop_amount_char().into(),
        KeyCode::Delete => app.clear_amount().into(),
        KeyCode::Char(ch) => app.push_amount_char(ch).into(),
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
