//! Scenario Store Port (Driven Port)
//!
//! Opaque key-value storage for calculator state. The engine never reads or
//! writes it; callers decide when to load and save.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use crate::application::dto::CalculatorState;

/// Key the calculator saves its working state under.
pub const DEFAULT_STATE_KEY: &str = "roi-calculator-state";

/// Scenario storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key cannot be used as a storage name.
    #[error("Invalid store key '{key}': {reason}")]
    InvalidKey {
        /// Offending key.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Underlying IO failure.
    #[error("Store IO error for '{key}': {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Stored data could not be encoded or decoded.
    #[error("Store serialization error for '{key}': {source}")]
    Serialization {
        /// Key being accessed.
        key: String,
        /// The underlying serde error.
        source: serde_json::Error,
    },
}

/// Port for calculator state persistence.
pub trait ScenarioStorePort: Send + Sync {
    /// Save state under `key`, replacing any previous value.
    fn save(&self, key: &str, state: &CalculatorState) -> Result<(), StoreError>;

    /// Load the state stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<CalculatorState>, StoreError>;

    /// Remove the state stored under `key`. Missing keys are not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory implementation for testing and single-process callers.
#[derive(Debug, Default)]
pub struct InMemoryScenarioStore {
    states: RwLock<HashMap<String, CalculatorState>>,
}

impl InMemoryScenarioStore {
    /// Create a new in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScenarioStorePort for InMemoryScenarioStore {
    fn save(&self, key: &str, state: &CalculatorState) -> Result<(), StoreError> {
        let mut states = self
            .states
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        states.insert(key.to_string(), state.clone());
        drop(states);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<CalculatorState>, StoreError> {
        let states = self.states.read().unwrap_or_else(PoisonError::into_inner);
        Ok(states.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut states = self
            .states
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        states.remove(key);
        drop(states);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_save_load_delete() {
        let store = InMemoryScenarioStore::new();
        assert!(store.is_empty());

        let state = CalculatorState::new("Pilot");
        store.save(DEFAULT_STATE_KEY, &state).unwrap();
        assert_eq!(store.len(), 1);

        let loaded = store.load(DEFAULT_STATE_KEY).unwrap();
        assert_eq!(loaded, Some(state));

        store.delete(DEFAULT_STATE_KEY).unwrap();
        assert_eq!(store.load(DEFAULT_STATE_KEY).unwrap(), None);
        store.delete(DEFAULT_STATE_KEY).unwrap();
    }

    #[test]
    fn save_replaces_previous_state() {
        let store = InMemoryScenarioStore::new();
        store.save("k", &CalculatorState::new("first")).unwrap();
        store.save("k", &CalculatorState::new("second")).unwrap();

        let Some(loaded) = store.load("k").unwrap() else {
            panic!("state should be stored");
        };
        assert_eq!(loaded.name, "second");
        assert_eq!(store.len(), 1);
    }
}
