use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::App;
use super::effects::DataEffects;
use super::reducer::reduce;
use super::state::AppState;

/// Component runtime - manages action processing
///
/// The Runtime is responsible for:
/// - Holding the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Actions produced by completed effects
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    ///
    /// Must be called inside a tokio runtime: the effect executor is spawned
    /// here.
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx).await;
        });

        Self {
            state: initial_state,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let is_refresh = matches!(action, Action::RefreshData);

        let state = std::mem::take(&mut self.state);
        let (new_state, reducer_effect) = reduce(state, action);
        self.state = new_state;

        let effect = if is_refresh {
            debug!("ACTION: RefreshData - generating load effects");
            Effect::Batch(vec![reducer_effect, self.data_effects.handle_refresh()])
        } else {
            reducer_effect
        };

        self.execute_effect(effect);
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        App.view(&self.state)
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task. Effects can dispatch new actions
    /// which feed back into the runtime.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::MockSource;
    use crate::types::Dataset;

    fn create_test_runtime() -> Runtime {
        let data_effects = Arc::new(DataEffects::new(MockSource::populated().into_shared()));
        Runtime::new(AppState::default(), data_effects)
    }

    /// Poll the action queue until `done` holds or a deadline passes
    async fn settle(runtime: &mut Runtime, done: impl Fn(&AppState) -> bool) {
        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(5);
        while tokio::time::Instant::now() < deadline {
            runtime.process_actions();
            if done(runtime.state()) {
                return;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn test_dispatch_action() {
        let mut runtime = create_test_runtime();
        runtime.dispatch(Action::FocusNext);
        assert_eq!(runtime.state().ui.focus, Dataset::Tournament);
    }

    #[tokio::test]
    async fn test_action_queue() {
        let mut runtime = create_test_runtime();
        assert_eq!(runtime.process_actions(), 0);

        for _ in 0..2 {
            runtime
                .effect_tx
                .send(Effect::Async(Box::pin(async { Action::FocusNext })))
                .unwrap();
        }

        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(5);
        let mut count = 0;
        while count < 2 && tokio::time::Instant::now() < deadline {
            count += runtime.process_actions();
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        }

        assert_eq!(count, 2);
        assert_eq!(runtime.state().ui.focus, Dataset::Regular);
    }

    #[tokio::test]
    async fn test_effect_execution() {
        let mut runtime = create_test_runtime();
        runtime
            .effect_tx
            .send(Effect::Async(Box::pin(async { Action::FocusNext })))
            .unwrap();

        settle(&mut runtime, |s| s.ui.focus == Dataset::Tournament).await;
        assert_eq!(runtime.state().ui.focus, Dataset::Tournament);
    }

    #[tokio::test]
    async fn test_refresh_data_loads_both_rosters() {
        let mut runtime = create_test_runtime();
        runtime.dispatch(Action::RefreshData);
        assert_eq!(runtime.state().data.loading.len(), 2);

        settle(&mut runtime, |s| s.data.loading.is_empty()).await;

        let state = runtime.state();
        assert!(state.data.loading.is_empty());
        assert_eq!(state.roster(Dataset::Regular).map(|r| r.len()), Some(15));
        assert_eq!(state.roster(Dataset::Tournament).map(|r| r.len()), Some(6));
    }

    #[tokio::test]
    async fn test_build_returns_component_tree() {
        let runtime = create_test_runtime();
        match runtime.build() {
            Element::Container { children, .. } => assert_eq!(children.len(), 3),
            _ => panic!("Expected container element from App component"),
        }
    }
}
