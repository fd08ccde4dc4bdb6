use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::DisplayConfig;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::state::AppState;

/// Key hints shown when there is no status message
const KEY_HINTS: &str = "Tab focus  ←→ column  s sort  1-5 positions  Space collapse  r reload  q quit";

/// StatusBar component - renders the two-line status bar
///
/// Left side: status/error message, or key hints
/// Right side: load state and time of the last completed load
pub struct StatusBar;

#[derive(Debug, Clone)]
pub struct StatusBarProps {
    pub message: Option<String>,
    pub is_error: bool,
    pub loading: bool,
    pub last_load: Option<DateTime<Local>>,
}

impl StatusBarProps {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            message: state.system.status_message.clone(),
            is_error: state.system.status_is_error,
            loading: !state.data.loading.is_empty(),
            last_load: state.system.last_load,
        }
    }
}

impl Component for StatusBar {
    type Props = StatusBarProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(StatusBarWidget {
            props: props.clone(),
        }))
    }
}

#[derive(Clone)]
struct StatusBarWidget {
    props: StatusBarProps,
}

impl StatusBarWidget {
    fn right_text(&self) -> String {
        if self.props.loading {
            "Loading...".to_string()
        } else if let Some(at) = self.props.last_load {
            format!("Loaded {}", at.format("%H:%M:%S"))
        } else {
            "Not loaded".to_string()
        }
    }
}

impl ElementWidget for StatusBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let right_text = self.right_text();

        // bar, space, text, space
        let bar_position = area
            .width
            .saturating_sub(right_text.chars().count() as u16 + 3);

        let line1 = config.box_chars.horizontal.repeat(area.width as usize);

        let (left_text, left_style) = match &self.props.message {
            Some(msg) if self.props.is_error => (
                format!("ERROR: {}", msg),
                Style::default().fg(config.theme.worst_fg),
            ),
            Some(msg) => (msg.clone(), Style::default()),
            None => (KEY_HINTS.to_string(), Style::default().add_modifier(Modifier::DIM)),
        };
        let left_text: String = left_text
            .chars()
            .take((bar_position as usize).saturating_sub(1))
            .collect();

        let left_len = left_text.chars().count() + 1;
        let padding_len = (bar_position as usize).saturating_sub(left_len);

        let line2 = Line::from(vec![
            Span::raw(" "),
            Span::styled(left_text, left_style),
            Span::raw(" ".repeat(padding_len)),
            Span::raw(config.box_chars.vertical.clone()),
            Span::raw(" "),
            Span::raw(right_text),
            Span::raw(" "),
        ]);

        Paragraph::new(vec![Line::raw(line1), line2]).render(area, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, buffer_lines, render_widget};
    use chrono::TimeZone;
    use ratatui::style::Color;

    fn props() -> StatusBarProps {
        StatusBarProps {
            message: None,
            is_error: false,
            loading: false,
            last_load: None,
        }
    }

    fn render(props: StatusBarProps, width: u16) -> Buffer {
        let widget = StatusBarWidget { props };
        render_widget(&widget, width, 2)
    }

    #[test]
    fn test_status_bar_loading() {
        let buf = render(
            StatusBarProps {
                message: Some("Ready".into()),
                loading: true,
                ..props()
            },
            40,
        );
        let line2 = format!(" Ready{}│ Loading...", " ".repeat(21));
        assert_buffer(&buf, &[&"─".repeat(40), &line2]);
    }

    #[test]
    fn test_status_bar_shows_last_load_time() {
        let at = Local.with_ymd_and_hms(2025, 3, 14, 14, 3, 22).single();
        let buf = render(
            StatusBarProps {
                last_load: at,
                ..props()
            },
            100,
        );
        let lines = buffer_lines(&buf);
        assert!(lines[1].contains("│ Loaded 14:03:22"));
        assert!(lines[1].contains("Tab focus"));
    }

    #[test]
    fn test_status_bar_error_is_coloured() {
        let buf = render(
            StatusBarProps {
                message: Some("bad".into()),
                is_error: true,
                ..props()
            },
            40,
        );
        let lines = buffer_lines(&buf);
        assert!(lines[1].starts_with(" ERROR: bad"));
        assert_eq!(buf[(1, 1)].fg, Color::Red);
        assert!(lines[1].contains("Not loaded"));
    }

    #[test]
    fn test_from_state() {
        let mut state = AppState::default();
        state.data.loading.insert(crate::types::Dataset::Tournament);
        let props = StatusBarProps::from_state(&state);
        assert!(props.loading);
        assert!(props.message.is_none());
    }
}
