use std::sync::Arc;

use crate::roster::Roster;
use crate::types::Dataset;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async roster loading)
#[derive(Debug, Clone)]
pub enum Action {
    // Data actions
    /// Reload both leaderboards from the record source
    RefreshData,

    /// A roster finished loading (from effects)
    RosterLoaded(Dataset, Arc<Roster>),

    // Focus
    /// Move keyboard focus to the other leaderboard
    FocusNext,

    // Table actions, all aimed at the focused leaderboard
    Table(TableAction),

    // System actions
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// Header click on a column index
    ClickHeader(usize),
    /// Header click on the column under the cursor
    SortByCursor,
    MoveColumn(isize),
    MoveRow(isize),
    TogglePosition(u8),
    ToggleCollapsed,
}
