//! Manage Scenario Use Case

use std::sync::Arc;

use crate::application::dto::CalculatorState;
use crate::application::ports::{DEFAULT_STATE_KEY, ScenarioStorePort, StoreError};

/// Use case for saving and restoring calculator state under one key.
pub struct ManageScenarioUseCase<S>
where
    S: ScenarioStorePort,
{
    store: Arc<S>,
    key: String,
}

impl<S> ManageScenarioUseCase<S>
where
    S: ScenarioStorePort,
{
    /// Create a use case bound to [`DEFAULT_STATE_KEY`].
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, DEFAULT_STATE_KEY)
    }

    /// Create a use case bound to a custom key.
    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist the state.
    pub fn save(&self, state: &CalculatorState) -> Result<(), StoreError> {
        self.store.save(&self.key, state)?;
        tracing::debug!(key = %self.key, scenario_id = %state.id, "scenario saved");
        Ok(())
    }

    /// Restore the saved state, if any.
    pub fn load(&self) -> Result<Option<CalculatorState>, StoreError> {
        self.store.load(&self.key)
    }

    /// Restore the saved state, or a fresh one when nothing is stored.
    pub fn load_or_default(&self) -> Result<CalculatorState, StoreError> {
        let state = self.load()?;
        if state.is_none() {
            tracing::debug!(key = %self.key, "no saved scenario, starting fresh");
        }
        Ok(state.unwrap_or_default())
    }

    /// Discard the saved state.
    pub fn reset(&self) -> Result<(), StoreError> {
        self.store.delete(&self.key)
    }
}
