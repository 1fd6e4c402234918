//! Risk model inputs and outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference base discount rate (percent) used when the caller has none.
pub const DEFAULT_BASE_DISCOUNT_RATE: f64 = 10.0;

/// Four independent risk scores, each expected in `[0, 100]`.
///
/// Range enforcement happens upstream. Out-of-range scores still produce a
/// defined (if meaningless) adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskInputs {
    /// Risk that delivery slips or the build fails.
    pub implementation_risk: f64,
    /// Risk that users do not adopt the system.
    pub adoption_risk: f64,
    /// Risk that the model or integration underperforms.
    pub technical_risk: f64,
    /// Risk that market conditions erode the benefit.
    pub market_risk: f64,
}

impl RiskInputs {
    /// Create risk inputs from the four scores.
    #[must_use]
    pub const fn new(
        implementation_risk: f64,
        adoption_risk: f64,
        technical_risk: f64,
        market_risk: f64,
    ) -> Self {
        Self {
            implementation_risk,
            adoption_risk,
            technical_risk,
            market_risk,
        }
    }

    /// Same score on every dimension.
    #[must_use]
    pub const fn uniform(score: f64) -> Self {
        Self::new(score, score, score, score)
    }

    /// Scores in the fixed order implementation, adoption, technical, market.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [
            self.implementation_risk,
            self.adoption_risk,
            self.technical_risk,
            self.market_risk,
        ]
    }
}

/// Per-dimension weights for the weighted average risk.
///
/// Weights are expected to sum to 1.0 but are never renormalised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskWeights {
    /// Weight of implementation risk.
    pub implementation: f64,
    /// Weight of adoption risk.
    pub adoption: f64,
    /// Weight of technical risk.
    pub technical: f64,
    /// Weight of market risk.
    pub market: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            implementation: 0.30,
            adoption: 0.25,
            technical: 0.25,
            market: 0.20,
        }
    }
}

impl RiskWeights {
    /// Weights in the same order as [`RiskInputs::as_array`].
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [self.implementation, self.adoption, self.technical, self.market]
    }

    /// Sum of all four weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Risk model configuration passed explicitly to each call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskModelConfig {
    /// Dimension weights.
    #[serde(default)]
    pub weights: RiskWeights,
    /// Firm discount rate (percent) the risk premium is added to.
    #[serde(default = "default_base_discount_rate")]
    pub base_discount_rate: f64,
}

impl Default for RiskModelConfig {
    fn default() -> Self {
        Self {
            weights: RiskWeights::default(),
            base_discount_rate: DEFAULT_BASE_DISCOUNT_RATE,
        }
    }
}

impl RiskModelConfig {
    /// Config with default weights and the given base rate.
    #[must_use]
    pub fn with_base_rate(base_discount_rate: f64) -> Self {
        Self {
            base_discount_rate,
            ..Self::default()
        }
    }
}

const fn default_base_discount_rate() -> f64 {
    DEFAULT_BASE_DISCOUNT_RATE
}

/// Categorical reading of the weighted average risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Weighted risk up to 25.
    Low,
    /// Weighted risk above 25, up to 45.
    Moderate,
    /// Weighted risk above 45, up to 65.
    Elevated,
    /// Weighted risk above 65.
    High,
}

impl RiskLevel {
    /// Classify a weighted average risk score.
    #[must_use]
    pub fn from_weighted_risk(weighted_average_risk: f64) -> Self {
        if weighted_average_risk <= 25.0 {
            Self::Low
        } else if weighted_average_risk <= 45.0 {
            Self::Moderate
        } else if weighted_average_risk <= 65.0 {
            Self::Elevated
        } else {
            Self::High
        }
    }

    /// Lowercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Elevated => "elevated",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band around the risk multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower multiplier.
    pub lower: f64,
    /// Upper multiplier, capped at 1.0.
    pub upper: f64,
}

/// Named scenario multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
    /// 70% of the baseline multiplier.
    pub pessimistic: f64,
    /// The risk multiplier itself.
    pub baseline: f64,
    /// 130% of the baseline multiplier, capped at 1.0.
    pub optimistic: f64,
}

/// Result of the risk adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAdjustedOutput {
    /// Unweighted mean of the four scores (display only).
    pub average_risk: f64,
    /// Weighted mean using the configured weights.
    pub weighted_average_risk: f64,
    /// Linear haircut, 0.5 at weighted risk 100 and 1.0 at 0.
    pub risk_multiplier: f64,
    /// Base discount rate plus the risk premium (percent).
    pub risk_adjusted_discount_rate: f64,
    /// Band around the multiplier.
    pub confidence_interval: ConfidenceInterval,
    /// Pessimistic, baseline and optimistic multipliers.
    pub scenario_analysis: ScenarioAnalysis,
    /// Categorical risk level.
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((RiskWeights::default().total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn risk_level_boundaries_are_inclusive() {
        assert_eq!(RiskLevel::from_weighted_risk(25.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_weighted_risk(25.01), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_weighted_risk(45.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_weighted_risk(65.0), RiskLevel::Elevated);
        assert_eq!(RiskLevel::from_weighted_risk(65.5), RiskLevel::High);
    }

    #[test]
    fn risk_inputs_serialize_camel_case() {
        let json = serde_json::to_string(&RiskInputs::uniform(10.0)).unwrap();
        assert!(json.contains(r#""implementationRisk":10.0"#));
        assert!(json.contains(r#""marketRisk":10.0"#));
    }

    #[test]
    fn risk_model_config_fills_defaults() {
        let config: RiskModelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RiskModelConfig::default());
        assert_eq!(RiskLevel::Elevated.to_string(), "elevated");
    }
}
