//! Weighted-average risk adjustment.
//!
//! Risks are treated as frictions that reduce realised benefit, not as
//! independent failure events. The multiplier is a linear haircut on the
//! weighted average with a floor of 0.5, instead of the survival product
//! `∏(1 - risk_i)` which collapses toward zero for several moderate risks.

use super::value_objects::{
    ConfidenceInterval, RiskAdjustedOutput, RiskInputs, RiskLevel, RiskModelConfig,
    ScenarioAnalysis,
};

/// Weighted risk of 100 halves the multiplier.
const MULTIPLIER_DIVISOR: f64 = 200.0;
/// Each 5 points of weighted risk add one point of discount rate.
const PREMIUM_DIVISOR: f64 = 5.0;
/// Spread of the confidence band at weighted risk 100.
const MAX_CONFIDENCE_SPREAD: f64 = 0.4;
const PESSIMISTIC_FACTOR: f64 = 0.7;
const OPTIMISTIC_FACTOR: f64 = 1.3;
/// Multipliers never exceed full benefit realisation.
const MULTIPLIER_CAP: f64 = 1.0;

/// Convert four risk scores into a multiplier, adjusted discount rate,
/// confidence band, scenarios and risk level.
///
/// Weights are used as given. If they do not sum to 1.0 the weighted
/// average simply scales with their total.
#[must_use]
pub fn calculate_risk_adjustment(
    inputs: &RiskInputs,
    config: &RiskModelConfig,
) -> RiskAdjustedOutput {
    let scores = inputs.as_array();
    let weights = config.weights.as_array();

    let average_risk = scores.iter().sum::<f64>() / scores.len() as f64;
    let weighted_average_risk: f64 = scores
        .iter()
        .zip(weights.iter())
        .map(|(score, weight)| score * weight)
        .sum();

    let risk_multiplier = 1.0 - weighted_average_risk / MULTIPLIER_DIVISOR;
    let risk_adjusted_discount_rate =
        config.base_discount_rate + weighted_average_risk / PREMIUM_DIVISOR;

    let spread = (weighted_average_risk / 100.0) * MAX_CONFIDENCE_SPREAD;
    let confidence_interval = ConfidenceInterval {
        lower: risk_multiplier * (1.0 - spread),
        upper: (risk_multiplier * (1.0 + spread)).min(MULTIPLIER_CAP),
    };

    let scenario_analysis = ScenarioAnalysis {
        pessimistic: risk_multiplier * PESSIMISTIC_FACTOR,
        baseline: risk_multiplier,
        optimistic: (risk_multiplier * OPTIMISTIC_FACTOR).min(MULTIPLIER_CAP),
    };

    RiskAdjustedOutput {
        average_risk,
        weighted_average_risk,
        risk_multiplier,
        risk_adjusted_discount_rate,
        confidence_interval,
        scenario_analysis,
        risk_level: RiskLevel::from_weighted_risk(weighted_average_risk),
    }
}
