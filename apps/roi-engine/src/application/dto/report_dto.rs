//! Report DTOs handed to the presentation layer

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::totals_dto::ProjectTotals;
use crate::domain::financial::{CashFlowPeriod, FinancialMetrics};
use crate::domain::risk_adjustment::RiskAdjustedOutput;

/// Named risk scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// 70% of the baseline multiplier.
    Pessimistic,
    /// The risk multiplier.
    Baseline,
    /// 130% of the baseline multiplier, capped at 1.0.
    Optimistic,
}

impl ScenarioKind {
    /// All scenarios in display order.
    pub const ALL: [Self; 3] = [Self::Pessimistic, Self::Baseline, Self::Optimistic];
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pessimistic => f.write_str("pessimistic"),
            Self::Baseline => f.write_str("baseline"),
            Self::Optimistic => f.write_str("optimistic"),
        }
    }
}

/// ROI and NPV with benefits scaled by one scenario multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub scenario: ScenarioKind,
    /// Multiplier applied to annual benefits.
    pub multiplier: f64,
    /// Annual benefits after the multiplier.
    pub adjusted_annual_benefits: f64,
    /// Simple ROI against total cost of ownership (percent).
    pub roi: f64,
    /// NPV at the caller's discount rate.
    pub npv: f64,
}

/// Everything the presentation layer renders for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiReport {
    /// Scenario the report was computed for.
    pub scenario_id: Uuid,
    /// Project name.
    pub name: String,
    /// Aggregated totals.
    pub totals: ProjectTotals,
    /// Metric bundle.
    pub metrics: FinancialMetrics,
    /// Risk adjustment detail.
    pub risk: RiskAdjustedOutput,
    /// Yearly cash-flow projection.
    pub projection: Vec<CashFlowPeriod>,
    /// Pessimistic, baseline and optimistic outcomes.
    pub scenarios: Vec<ScenarioOutcome>,
}
