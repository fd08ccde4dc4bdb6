// Module declarations
pub mod components;

pub mod action;
pub mod component;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod table;

#[cfg(test)]
pub mod testing;

pub use action::{Action, TableAction};
pub use component::{Component, Effect, Element};
pub use effects::DataEffects;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;
pub use table::{Alignment, CellValue, ColumnDef};

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::config::Config;
use crate::data_provider::RecordSource;

/// Raw mode and the alternate screen, undone on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::error!("TERMINAL: failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            tracing::error!("TERMINAL: failed to leave alternate screen: {}", e);
        }
    }
}

/// Main entry point for TUI mode
pub async fn run(
    source: Arc<dyn RecordSource>,
    config: Config,
) -> Result<(), io::Error> {
    // dropped last, after `terminal`
    let _guard = TerminalGuard::enter()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(source));
    let mut runtime = Runtime::new(AppState::new(config), data_effects);

    // Trigger initial data load
    runtime.dispatch(Action::RefreshData);

    let mut renderer = Renderer::new();

    // Main loop
    loop {
        // Process any actions from effects FIRST (so data loads trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            let element = runtime.build();
            let config = &runtime.state().system.config.display;
            renderer.render(element, area, f.buffer_mut(), config);
        })?;

        if actions_processed > 0 {
            continue;
        }

        // Poll for keyboard events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let Some(action) = key_to_action(key, runtime.state()) else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }
                runtime.dispatch(action);
            }
        }
    }

    Ok(())
}
