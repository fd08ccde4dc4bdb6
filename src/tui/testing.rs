//! General test utilities for TUI tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::tui::testing::*;
//!
//! let state = loaded_state();
//! let buf = render_widget(&widget, RENDER_WIDTH, 10);
//! assert_buffer(&buf, &["..."]);
//! ```

use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::action::Action;
use super::component::ElementWidget;
use super::reducer::reduce;
use super::state::AppState;
use crate::config::DisplayConfig;
use crate::fixtures::create_mock_records;
use crate::roster::Roster;
use crate::types::Dataset;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// AppState with both mock rosters loaded
pub fn loaded_state() -> AppState {
    Dataset::all()
        .into_iter()
        .fold(AppState::default(), |state, dataset| {
            let roster = Roster::load(dataset, &create_mock_records(dataset));
            reduce(state, Action::RosterLoaded(dataset, Arc::new(roster))).0
        })
}

/// Render a widget into a fresh buffer with the default display config
pub fn render_widget(widget: &dyn ElementWidget, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf, &DisplayConfig::default());
    buf
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}
