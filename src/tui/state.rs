use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::controller::TableController;
use crate::roster::{PositionFilter, Roster};
use crate::types::Dataset;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Loaded rosters
    pub data: DataState,

    /// Per-leaderboard view state
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

impl AppState {
    /// Fresh state whose tables start with the configured position filter
    pub fn new(config: Config) -> Self {
        let filter = PositionFilter::new(config.default_positions.iter().copied());
        Self {
            data: DataState::default(),
            ui: UiState::with_filter(filter),
            system: SystemState {
                config,
                ..SystemState::default()
            },
        }
    }

    pub fn roster(&self, dataset: Dataset) -> Option<&Arc<Roster>> {
        self.data.rosters.get(&dataset)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    // Rosters are shared with the effects that produced them
    pub rosters: HashMap<Dataset, Arc<Roster>>,

    /// Datasets with a load in flight
    pub loading: HashSet<Dataset>,
}

#[derive(Debug, Clone)]
pub struct UiState {
    /// Leaderboard that receives table keys
    pub focus: Dataset,
    pub regular: TableController,
    pub tournament: TableController,
}

impl Default for UiState {
    fn default() -> Self {
        Self::with_filter(PositionFilter::default())
    }
}

impl UiState {
    fn with_filter(filter: PositionFilter) -> Self {
        Self {
            focus: Dataset::Regular,
            regular: TableController::new(filter.clone()),
            tournament: TableController::new(filter),
        }
    }

    pub fn controller(&self, dataset: Dataset) -> &TableController {
        match dataset {
            Dataset::Regular => &self.regular,
            Dataset::Tournament => &self.tournament,
        }
    }

    pub fn controller_mut(&mut self, dataset: Dataset) -> &mut TableController {
        match dataset {
            Dataset::Regular => &mut self.regular,
            Dataset::Tournament => &mut self.tournament,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    /// When the most recent roster finished loading
    pub last_load: Option<DateTime<Local>>,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }
}
