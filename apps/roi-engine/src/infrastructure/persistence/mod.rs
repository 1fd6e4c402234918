//! Persistence Adapters
//!
//! Implementations of [`ScenarioStorePort`](crate::application::ports::ScenarioStorePort)
//! beyond the in-memory store.

mod json_file_store;

pub use json_file_store::JsonFileScenarioStore;
