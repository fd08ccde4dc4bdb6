use super::leaderboard::{LeaderboardPanel, LeaderboardPanelProps};
use super::status_bar::{StatusBar, StatusBarProps};
use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::state::AppState;
use crate::types::Dataset;

/// Root App component
///
/// Stacks the regular-season leaderboard above the tournament leaderboard,
/// with the status bar at the bottom.
pub struct App;

impl Component for App {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        tracing::trace!("APP: App.view() called with focus={}", props.ui.focus.name());
        vertical(
            [
                self.panel_constraint(props, Dataset::Regular),
                self.panel_constraint(props, Dataset::Tournament),
                Constraint::Length(2), // StatusBar (2 lines: separator + content)
            ],
            vec![
                self.render_panel(props, Dataset::Regular),
                self.render_panel(props, Dataset::Tournament),
                StatusBar.view(&StatusBarProps::from_state(props)),
            ],
        )
    }
}

impl App {
    /// Collapsed panels shrink to their title block
    fn panel_constraint(&self, state: &AppState, dataset: Dataset) -> Constraint {
        if state.ui.controller(dataset).is_expanded() {
            Constraint::Min(4)
        } else {
            Constraint::Length(3)
        }
    }

    fn render_panel(&self, state: &AppState, dataset: Dataset) -> Element {
        LeaderboardPanel.view(&LeaderboardPanelProps {
            dataset,
            roster: state.roster(dataset).cloned(),
            controller: state.ui.controller(dataset).clone(),
            focused: state.ui.focus == dataset,
            loading: state.data.loading.contains(&dataset),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::tui::component::ContainerLayout;
    use crate::tui::renderer::Renderer;
    use crate::tui::testing::{buffer_lines, loaded_state, RENDER_WIDTH};
    use ratatui::{buffer::Buffer, layout::Rect};

    #[test]
    fn test_app_layout() {
        let mut state = loaded_state();
        state.ui.tournament.toggle_expanded();

        match App.view(&state) {
            Element::Container { children, layout } => {
                assert_eq!(children.len(), 3);
                assert_eq!(
                    layout,
                    ContainerLayout::Vertical(vec![
                        Constraint::Min(4),
                        Constraint::Length(3),
                        Constraint::Length(2),
                    ])
                );
            }
            _ => panic!("Expected container"),
        }
    }

    #[test]
    fn test_app_renders_both_panels() {
        let state = loaded_state();
        let area = Rect::new(0, 0, RENDER_WIDTH, 40);
        let mut buf = Buffer::empty(area);
        Renderer::new().render(App.view(&state), area, &mut buf, &DisplayConfig::default());

        let lines = buffer_lines(&buf);
        assert!(lines[0].starts_with("▼ Regular Season (15 players)"));
        assert!(lines.iter().any(|l| l.starts_with("▼ Tournament (6 players)")));
        assert!(lines[39].contains("Loaded"));
    }
}
