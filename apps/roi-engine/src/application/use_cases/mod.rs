//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod calculate_roi;
mod manage_scenario;

pub use calculate_roi::CalculateRoiUseCase;
pub use manage_scenario::ManageScenarioUseCase;
