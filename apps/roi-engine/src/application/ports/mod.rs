//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod scenario_store_port;

pub use scenario_store_port::{
    DEFAULT_STATE_KEY, InMemoryScenarioStore, ScenarioStorePort, StoreError,
};
