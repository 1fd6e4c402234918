//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for use case inputs/outputs and the CLI file formats.

mod calculator_state_dto;
mod records_dto;
mod report_dto;
mod totals_dto;

pub use calculator_state_dto::{CalculatorState, DEFAULT_HORIZON_YEARS};
pub use records_dto::{BenefitCategory, BenefitItem, CostCategory, CostItem};
pub use report_dto::{RoiReport, ScenarioKind, ScenarioOutcome};
pub use totals_dto::ProjectTotals;
