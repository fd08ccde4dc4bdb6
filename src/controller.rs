//! Per-table view state: sort, position filter, collapse and cursors.
//!
//! A controller never owns its roster; every operation takes the roster it
//! is bound to. Two controllers never share state, so the regular and the
//! tournament tables sort and filter independently.

use std::cmp::Ordering;

use tracing::debug;

use crate::columns::Column;
use crate::roster::{ColumnStats, PositionFilter, Roster};
use crate::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableController {
    /// Column of the last header click and its direction
    sort: Option<(Column, SortDirection)>,
    filter: PositionFilter,
    expanded: bool,
    /// Indices into the bound roster's backing sequence, in display order
    row_order: Vec<usize>,
    cursor_column: usize,
    cursor_row: usize,
}

impl Default for TableController {
    fn default() -> Self {
        Self::new(PositionFilter::default())
    }
}

impl TableController {
    pub fn new(filter: PositionFilter) -> Self {
        Self {
            sort: None,
            filter,
            expanded: true,
            row_order: Vec::new(),
            cursor_column: 0,
            cursor_row: 0,
        }
    }

    /// Attach to a freshly loaded roster
    ///
    /// Row order and sort go back to the roster's ranking; the filter and
    /// collapse state survive.
    pub fn bind(&mut self, roster: &Roster) {
        self.row_order = (0..roster.len()).collect();
        self.sort = None;
        self.cursor_row = 0;
    }

    fn ensure_bound(&mut self, roster: &Roster) {
        if self.row_order.len() != roster.len() {
            self.bind(roster);
        }
    }

    pub fn sort(&self) -> Option<(Column, SortDirection)> {
        self.sort
    }

    pub fn filter(&self) -> &PositionFilter {
        &self.filter
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn cursor_column(&self) -> usize {
        self.cursor_column
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    /// Direction shown next to a header, if that column is the sort column
    pub fn sort_indicator(&self, column: Column) -> Option<SortDirection> {
        match self.sort {
            Some((c, direction)) if c == column => Some(direction),
            _ => None,
        }
    }

    /// Header click: a new column sorts ascending, the same column flips
    pub fn click_header(&mut self, roster: &Roster, column: Column) {
        let direction = match self.sort {
            Some((current, dir)) if current == column => dir.flip(),
            _ => SortDirection::Ascending,
        };
        self.sort_by(roster, column, direction);
    }

    /// Click by header index; out-of-range indices are ignored
    pub fn click_header_index(&mut self, roster: &Roster, index: usize) -> bool {
        match Column::from_index(index) {
            Some(column) => {
                self.click_header(roster, column);
                true
            }
            None => false,
        }
    }

    /// Stable-sort the current row order by one column
    ///
    /// Rows with equal keys keep their relative order, so sorting twice in
    /// the same direction changes nothing.
    pub fn sort_by(&mut self, roster: &Roster, column: Column, direction: SortDirection) {
        self.ensure_bound(roster);
        let players = roster.players();
        self.row_order.sort_by(|&a, &b| {
            let ka = column.sort_key(&players[a]);
            let kb = column.sort_key(&players[b]);
            direction.apply(ka.compare(&kb))
        });
        self.sort = Some((column, direction));
        debug!(
            "TABLE: {} sorted by {} {:?}",
            roster.dataset().name(),
            column.header(),
            direction
        );
    }

    /// Toggle a position chip; unknown positions are ignored
    pub fn toggle_position(&mut self, position: u8) -> bool {
        let changed = self.filter.toggle(position);
        if changed {
            self.cursor_row = 0;
        }
        changed
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Rows currently shown, in display order
    ///
    /// A collapsed table shows no rows. Filtering never changes the
    /// underlying order.
    pub fn visible_rows<'a>(&self, roster: &'a Roster) -> Vec<&'a Player> {
        if !self.expanded {
            return Vec::new();
        }
        self.filtered_rows(roster)
    }

    fn filtered_rows<'a>(&self, roster: &'a Roster) -> Vec<&'a Player> {
        if self.row_order.len() == roster.len() {
            self.row_order
                .iter()
                .filter_map(|&i| roster.get(i))
                .filter(|p| self.filter.accepts(p.position))
                .collect()
        } else {
            roster.filtered(&self.filter)
        }
    }

    /// Best/worst ranges over the filtered view
    pub fn column_stats(&self, roster: &Roster) -> ColumnStats {
        ColumnStats::compute(&self.filtered_rows(roster))
    }

    pub fn move_column(&mut self, delta: isize) {
        let max = Column::ALL.len() - 1;
        self.cursor_column = self.cursor_column.saturating_add_signed(delta).min(max);
    }

    pub fn move_row(&mut self, roster: &Roster, delta: isize) {
        let visible = self.visible_rows(roster).len();
        if visible == 0 {
            self.cursor_row = 0;
            return;
        }
        self.cursor_row = self.cursor_row.saturating_add_signed(delta).min(visible - 1);
    }
}
