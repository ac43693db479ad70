//! Key routing for the form runtime.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::model::FormAction;

/// Decode a terminal key press into a form action.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> FormAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'd') if ctrl => FormAction::Quit,
        KeyCode::Esc => FormAction::Quit,
        KeyCode::Tab | KeyCode::Down => FormAction::NextField,
        KeyCode::BackTab | KeyCode::Up => FormAction::PrevField,
        KeyCode::Right => FormAction::Increase,
        KeyCode::Left => FormAction::Decrease,
        KeyCode::Enter => FormAction::Submit,
        KeyCode::Backspace => FormAction::Backspace,
        KeyCode::Char(c) if !ctrl => FormAction::Insert(c),
        _ => FormAction::Ignore,
    }
}
