/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::{Action, TableAction};
use super::state::AppState;

/// Handle global keys that work regardless of focus
fn handle_global_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::RefreshData),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),
        _ => None,
    }
}

/// Handle keys aimed at the focused leaderboard
fn handle_table_keys(key_code: KeyCode) -> Option<TableAction> {
    match key_code {
        KeyCode::Left => Some(TableAction::MoveColumn(-1)),
        KeyCode::Right => Some(TableAction::MoveColumn(1)),
        KeyCode::Up => Some(TableAction::MoveRow(-1)),
        KeyCode::Down => Some(TableAction::MoveRow(1)),
        KeyCode::PageUp => Some(TableAction::MoveRow(-10)),
        KeyCode::PageDown => Some(TableAction::MoveRow(10)),
        KeyCode::Enter | KeyCode::Char('s') => Some(TableAction::SortByCursor),
        KeyCode::Char(' ') => Some(TableAction::ToggleCollapsed),
        KeyCode::Char(c @ '1'..='5') => c
            .to_digit(10)
            .map(|d| TableAction::TogglePosition(d as u8)),
        _ => None,
    }
}

/// Convert a key event into an action
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} (focus: {})", key.code, state.ui.focus.name());

    handle_global_keys(key).or_else(|| handle_table_keys(key.code).map(Action::Table))
}
