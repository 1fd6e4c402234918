//! Infrastructure Layer
//!
//! Adapters (implementations) for the ports defined in the application
//! layer:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: File-backed scenario storage
//!
//! - **Inbound**
//!   - `scenario_file`: Scenario documents passed on the command line
pub mod persistence;
pub mod scenario_file;
