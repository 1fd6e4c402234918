//! Risk Adjustment Bounded Context
//!
//! Collapses four independent project risk scores into one multiplier and a
//! small family of named scenarios.
//!
//! # Key Concepts
//!
//! - **Weighted Average Risk**: Configurable per-dimension weights, never renormalised
//! - **Risk Multiplier**: Linear haircut in `[0.5, 1.0]` applied to ROI
//! - **Risk Premium**: Added to the caller's base discount rate

pub mod model;
pub mod value_objects;

pub use model::calculate_risk_adjustment;
pub use value_objects::{
    ConfidenceInterval, DEFAULT_BASE_DISCOUNT_RATE, RiskAdjustedOutput, RiskInputs, RiskLevel,
    RiskModelConfig, RiskWeights, ScenarioAnalysis,
};
