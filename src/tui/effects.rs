use std::sync::Arc;

use tracing::debug;

use super::action::Action;
use super::component::Effect;
use crate::data_provider::RecordSource;
use crate::loader;
use crate::types::Dataset;

/// Effect handler for roster loading
///
/// Each method returns an Effect that will dispatch `RosterLoaded` when the
/// roster's whole batch of records has settled.
pub struct DataEffects {
    source: Arc<dyn RecordSource>,
}

impl DataEffects {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Load both leaderboards as independent effects
    ///
    /// Each leaderboard renders as soon as its own roster arrives.
    pub fn handle_refresh(&self) -> Effect {
        Effect::Batch(Dataset::all().into_iter().map(|d| self.load_roster(d)).collect())
    }

    pub fn load_roster(&self, dataset: Dataset) -> Effect {
        let source = Arc::clone(&self.source);
        Effect::Async(Box::pin(async move {
            debug!("EFFECT: loading {}", dataset.name());
            let roster = loader::load_roster(source.as_ref(), dataset).await;
            Action::RosterLoaded(dataset, Arc::new(roster))
        }))
    }
}
