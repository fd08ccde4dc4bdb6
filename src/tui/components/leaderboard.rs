//! Leaderboard panel: title, position filter chips and the player table.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use super::table::TableWidget;
use crate::config::DisplayConfig;
use crate::controller::TableController;
use crate::positions::position_short_label;
use crate::roster::{Roster, ALL_POSITIONS};
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::table::leaderboard_columns;
use crate::types::Dataset;

/// Title, underline and chip line
const CHROME_LINES: u16 = 3;

pub struct LeaderboardPanel;

#[derive(Debug, Clone)]
pub struct LeaderboardPanelProps {
    pub dataset: Dataset,
    pub roster: Option<Arc<Roster>>,
    pub controller: TableController,
    pub focused: bool,
    pub loading: bool,
}

impl Component for LeaderboardPanel {
    type Props = LeaderboardPanelProps;

    fn view(&self, props: &Self::Props) -> Element {
        let controller = &props.controller;

        let body = match &props.roster {
            _ if !controller.is_expanded() => Body::Collapsed,
            None if props.loading => Body::Message("Loading players...".into()),
            None => Body::Message("No data".into()),
            Some(roster) if roster.is_empty() => Body::Message("No players loaded".into()),
            Some(roster) => {
                let rows = controller.visible_rows(roster);
                if rows.is_empty() {
                    Body::Message("No players match the selected positions".into())
                } else {
                    let stats = Arc::new(controller.column_stats(roster));
                    let sort = controller
                        .sort()
                        .map(|(column, direction)| (column.index(), direction));
                    let table = TableWidget::from_data(&leaderboard_columns(stats), &rows)
                        .with_selection(controller.cursor_row(), controller.cursor_column())
                        .with_focused(props.focused)
                        .with_sort(sort);
                    Body::Table(table)
                }
            }
        };

        let chips = ALL_POSITIONS
            .iter()
            .map(|&p| Chip {
                position: p,
                label: position_short_label(p).unwrap_or("?"),
                active: controller.filter().is_active(p),
            })
            .collect();

        Element::Widget(Box::new(LeaderboardWidget {
            title: props.dataset.name().to_string(),
            player_count: props.roster.as_ref().map(|r| r.len()),
            chips,
            expanded: controller.is_expanded(),
            focused: props.focused,
            body,
        }))
    }
}

#[derive(Clone, Debug)]
struct Chip {
    position: u8,
    label: &'static str,
    active: bool,
}

#[derive(Clone, Debug)]
enum Body {
    Collapsed,
    Message(String),
    Table(TableWidget),
}

#[derive(Clone, Debug)]
struct LeaderboardWidget {
    title: String,
    player_count: Option<usize>,
    chips: Vec<Chip>,
    expanded: bool,
    focused: bool,
    body: Body,
}

impl LeaderboardWidget {
    fn title_line(&self, config: &DisplayConfig) -> String {
        let marker = if self.expanded {
            &config.box_chars.expanded
        } else {
            &config.box_chars.collapsed
        };
        match self.player_count {
            Some(n) => format!("{} {} ({} players)", marker, self.title, n),
            None => format!("{} {}", marker, self.title),
        }
    }
}

impl ElementWidget for LeaderboardWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let mut y = area.y;

        // Title with double underline
        let title = self.title_line(config);
        let title_style = if self.focused {
            Style::default()
                .fg(config.theme.selection_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        buf.set_stringn(area.x, y, &title, area.width as usize, title_style);
        y += 1;
        if y >= area.bottom() {
            return;
        }
        let underline = config.box_chars.double_horizontal.repeat(title.chars().count());
        buf.set_stringn(area.x, y, &underline, area.width as usize, Style::default());
        y += 1;
        if y >= area.bottom() {
            return;
        }

        // Position chips
        let mut x = area.x;
        for chip in &self.chips {
            let text = format!("[{} {}]", chip.position, chip.label);
            let style = if chip.active {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let remaining = area.right().saturating_sub(x) as usize;
            if remaining == 0 {
                break;
            }
            buf.set_stringn(x, y, &text, remaining, style);
            x = x.saturating_add(text.chars().count() as u16 + 1);
        }
        y += 1;
        if y >= area.bottom() {
            return;
        }

        let body_area = Rect::new(area.x, y, area.width, area.bottom() - y);
        match &self.body {
            Body::Collapsed => {}
            Body::Message(msg) => {
                buf.set_stringn(
                    body_area.x + 2,
                    body_area.y,
                    msg,
                    body_area.width.saturating_sub(2) as usize,
                    Style::default().add_modifier(Modifier::ITALIC),
                );
            }
            Body::Table(table) => table.render(body_area, buf, config),
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        let body = match &self.body {
            Body::Collapsed => 0,
            Body::Message(_) => 1,
            Body::Table(table) => table.preferred_height().unwrap_or(0),
        };
        Some(CHROME_LINES + body)
    }
}
