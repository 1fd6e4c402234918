//! Caller-owned calculator state
//!
//! The full set of user inputs for one calculator session. The engine never
//! holds a copy: callers pass the state by reference into the use case and
//! decide themselves whether to persist it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::records_dto::{BenefitItem, CostItem};
use super::totals_dto::ProjectTotals;
use crate::domain::financial::{MAX_HORIZON_YEARS, MetricsInput};
use crate::domain::risk_adjustment::{DEFAULT_BASE_DISCOUNT_RATE, RiskInputs, RiskWeights};

/// Default analysis horizon in years.
pub const DEFAULT_HORIZON_YEARS: u32 = 3;

/// Inputs for one ROI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Scenario identifier.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Project name.
    #[serde(default)]
    pub name: String,
    /// Horizon in years.
    #[serde(default = "default_years")]
    pub years: u32,
    /// Annual discount rate (percent).
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
    /// Cost records.
    #[serde(default)]
    pub costs: Vec<CostItem>,
    /// Benefit records.
    #[serde(default)]
    pub benefits: Vec<BenefitItem>,
    /// Risk scores.
    #[serde(default)]
    pub risk: RiskInputs,
    /// Last modification time.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new("")
    }
}

impl CalculatorState {
    /// Create an empty state with default horizon and discount rate.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            years: DEFAULT_HORIZON_YEARS,
            discount_rate: DEFAULT_BASE_DISCOUNT_RATE,
            costs: Vec::new(),
            benefits: Vec::new(),
            risk: RiskInputs::default(),
            updated_at: Utc::now(),
        }
    }

    /// Add a cost record.
    pub fn add_cost(&mut self, cost: CostItem) {
        self.costs.push(cost);
        self.touch();
    }

    /// Add a benefit record.
    pub fn add_benefit(&mut self, benefit: BenefitItem) {
        self.benefits.push(benefit);
        self.touch();
    }

    /// Replace the risk scores.
    pub fn set_risk(&mut self, risk: RiskInputs) {
        self.risk = risk;
        self.touch();
    }

    /// Mark the state as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Horizon in years, capped at [`MAX_HORIZON_YEARS`].
    #[must_use]
    pub fn horizon_years(&self) -> u32 {
        self.years.min(MAX_HORIZON_YEARS)
    }

    /// Aggregate the records over the configured horizon.
    #[must_use]
    pub fn totals(&self) -> ProjectTotals {
        ProjectTotals::aggregate(&self.costs, &self.benefits, self.horizon_years())
    }

    /// Convert to engine input. Decimal amounts become `f64` here.
    #[must_use]
    pub fn to_metrics_input(&self, weights: RiskWeights) -> MetricsInput {
        let totals = self.totals();
        MetricsInput {
            initial_investment: to_f64(totals.initial_investment),
            annual_costs: to_f64(totals.annual_costs),
            total_costs: to_f64(totals.total_cost_of_ownership),
            annual_benefits: to_f64(totals.annual_benefits),
            total_benefits: to_f64(totals.total_benefits),
            years: self.horizon_years(),
            discount_rate: self.discount_rate,
            risk: self.risk,
            weights,
        }
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

const fn default_years() -> u32 {
    DEFAULT_HORIZON_YEARS
}

const fn default_discount_rate() -> f64 {
    DEFAULT_BASE_DISCOUNT_RATE
}
