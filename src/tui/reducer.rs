use std::sync::Arc;

use chrono::Local;
use tracing::{debug, warn};

use super::action::{Action, TableAction};
use super::component::Effect;
use super::state::AppState;
use crate::roster::Roster;
use crate::types::Dataset;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// No I/O happens here; loading is requested by the runtime through
/// `DataEffects` and comes back as `RosterLoaded`.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::RefreshData => handle_refresh_data(state),
        Action::RosterLoaded(dataset, roster) => handle_roster_loaded(state, dataset, roster),
        Action::FocusNext => {
            let mut new_state = state;
            new_state.ui.focus = new_state.ui.focus.other();
            debug!("FOCUS: {}", new_state.ui.focus.name());
            (new_state, Effect::None)
        }
        Action::Table(table_action) => reduce_table(state, table_action),
        Action::Quit => (state, Effect::None),
    }
}

fn handle_refresh_data(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.loading.extend(Dataset::all());
    new_state.system.status_message = None;
    new_state.system.status_is_error = false;
    (new_state, Effect::None)
}

fn handle_roster_loaded(state: AppState, dataset: Dataset, roster: Arc<Roster>) -> (AppState, Effect) {
    let mut new_state = state;
    debug!("DATA: {} loaded with {} players", dataset.name(), roster.len());

    new_state.ui.controller_mut(dataset).bind(&roster);
    new_state.data.loading.remove(&dataset);
    new_state.system.last_load = Some(Local::now());
    if roster.is_empty() {
        warn!("DATA: {} loaded no players", dataset.name());
        new_state
            .system
            .set_status_error_message(format!("{}: no players loaded", dataset.name()));
    } else if !new_state.system.status_is_error {
        // an empty roster from the same refresh stays on screen
        new_state
            .system
            .set_status_message(format!("{}: {} players", dataset.name(), roster.len()));
    }
    new_state.data.rosters.insert(dataset, roster);

    (new_state, Effect::None)
}

/// Apply a table action to the focused leaderboard
///
/// Nothing happens while that leaderboard has no roster.
fn reduce_table(state: AppState, action: TableAction) -> (AppState, Effect) {
    let mut new_state = state;
    let dataset = new_state.ui.focus;

    let Some(roster) = new_state.data.rosters.get(&dataset).cloned() else {
        debug!("TABLE: {} has no roster, ignoring {:?}", dataset.name(), action);
        return (new_state, Effect::None);
    };

    let controller = new_state.ui.controller_mut(dataset);
    match action {
        TableAction::ClickHeader(index) => {
            if !controller.click_header_index(&roster, index) {
                debug!("TABLE: no column at index {}", index);
            }
        }
        TableAction::SortByCursor => {
            let index = controller.cursor_column();
            controller.click_header_index(&roster, index);
        }
        TableAction::MoveColumn(delta) => controller.move_column(delta),
        TableAction::MoveRow(delta) => controller.move_row(&roster, delta),
        TableAction::TogglePosition(position) => {
            controller.toggle_position(position);
        }
        TableAction::ToggleCollapsed => controller.toggle_expanded(),
    }

    (new_state, Effect::None)
}
