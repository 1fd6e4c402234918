//! Aggregate metric calculation.
//!
//! Composes the individual metric functions and the risk model into one
//! [`FinancialMetrics`] bundle. There is no logic here beyond building the
//! yearly and monthly cash-flow series and delegating.

use serde::{Deserialize, Serialize};

use super::constants::{MAX_HORIZON_YEARS, MONTHS_PER_YEAR};
use super::irr::IrrSolver;
use super::metrics::{
    calculate_annualized_roi, calculate_benefit_cost_ratio, calculate_npv,
    calculate_profitability_index, calculate_simple_roi,
};
use super::payback::{Payback, calculate_discounted_payback, calculate_payback_period};
use crate::domain::risk_adjustment::{
    RiskAdjustedOutput, RiskInputs, RiskModelConfig, RiskWeights, calculate_risk_adjustment,
};

/// Already-aggregated totals for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsInput {
    /// Up-front outflow at period 0.
    pub initial_investment: f64,
    /// Recurring costs per year.
    pub annual_costs: f64,
    /// Total cost over the horizon (TCO).
    pub total_costs: f64,
    /// Benefits per year.
    pub annual_benefits: f64,
    /// Total benefits over the horizon.
    pub total_benefits: f64,
    /// Analysis horizon in years.
    pub years: u32,
    /// Annual discount rate (percent). Also the base of the risk premium.
    pub discount_rate: f64,
    /// Risk scores.
    pub risk: RiskInputs,
    /// Risk dimension weights.
    #[serde(default)]
    pub weights: RiskWeights,
}

impl MetricsInput {
    /// Build an input from constant annual flows, deriving totals as
    /// `initial + annual_costs * years` and `annual_benefits * years`.
    #[must_use]
    pub fn from_annual(
        initial_investment: f64,
        annual_costs: f64,
        annual_benefits: f64,
        years: u32,
        discount_rate: f64,
        risk: RiskInputs,
    ) -> Self {
        let horizon = f64::from(years);
        Self {
            initial_investment,
            annual_costs,
            total_costs: initial_investment + annual_costs * horizon,
            annual_benefits,
            total_benefits: annual_benefits * horizon,
            years,
            discount_rate,
            risk,
            weights: RiskWeights::default(),
        }
    }

    /// Replace the risk weights.
    #[must_use]
    pub const fn with_weights(mut self, weights: RiskWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Net annual flow after recurring costs.
    #[must_use]
    pub fn annual_net_benefit(&self) -> f64 {
        self.annual_benefits - self.annual_costs
    }

    /// Horizon used for the cash-flow series, capped at [`MAX_HORIZON_YEARS`].
    #[must_use]
    pub fn horizon_years(&self) -> u32 {
        self.years.min(MAX_HORIZON_YEARS)
    }

    /// Yearly series `[-initial, net, net, ...]`.
    #[must_use]
    pub fn yearly_cash_flows(&self) -> Vec<f64> {
        let years = self.horizon_years() as usize;
        let mut flows = Vec::with_capacity(years + 1);
        flows.push(-self.initial_investment);
        flows.extend(std::iter::repeat_n(self.annual_net_benefit(), years));
        flows
    }

    /// Monthly series `[-initial, net/12, ...]` over `years * 12` months.
    #[must_use]
    pub fn monthly_cash_flows(&self) -> Vec<f64> {
        let months = self.horizon_years() as usize * MONTHS_PER_YEAR as usize;
        let mut flows = Vec::with_capacity(months + 1);
        flows.push(-self.initial_investment);
        flows.extend(std::iter::repeat_n(
            self.annual_net_benefit() / MONTHS_PER_YEAR,
            months,
        ));
        flows
    }
}

/// Output bundle of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    /// Simple ROI (percent).
    #[serde(rename = "simpleROI")]
    pub simple_roi: f64,
    /// Compound annual ROI (percent).
    #[serde(rename = "annualizedROI")]
    pub annualized_roi: f64,
    /// NPV at the caller's discount rate.
    pub npv: f64,
    /// IRR (percent), `None` when undefined.
    pub irr: Option<f64>,
    /// Simple payback in months.
    pub payback_period_months: Payback,
    /// Discounted payback in months.
    pub discounted_payback_months: Payback,
    /// Total benefits over total costs.
    pub benefit_cost_ratio: f64,
    /// PV of future flows over initial investment.
    pub profitability_index: f64,
    /// Simple ROI scaled by the risk multiplier.
    #[serde(rename = "riskAdjustedROI")]
    pub risk_adjusted_roi: f64,
    /// NPV at the risk-adjusted discount rate.
    #[serde(rename = "riskAdjustedNPV")]
    pub risk_adjusted_npv: f64,
}

/// Metrics together with the risk output they were composed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsEvaluation {
    /// Computed metrics.
    pub metrics: FinancialMetrics,
    /// Risk adjustment applied.
    pub risk: RiskAdjustedOutput,
}

/// Stateless engine holding only solver configuration.
#[derive(Debug, Clone, Default)]
pub struct FinancialEngine {
    irr_solver: IrrSolver,
}

impl FinancialEngine {
    /// Create an engine with a configured IRR solver.
    #[must_use]
    pub const fn new(irr_solver: IrrSolver) -> Self {
        Self { irr_solver }
    }

    /// IRR solver used by this engine.
    #[must_use]
    pub const fn irr_solver(&self) -> &IrrSolver {
        &self.irr_solver
    }

    /// Compute all metrics and return the risk output alongside.
    #[must_use]
    pub fn evaluate(&self, input: &MetricsInput) -> MetricsEvaluation {
        let cash_flows = input.yearly_cash_flows();
        let risk = calculate_risk_adjustment(
            &input.risk,
            &RiskModelConfig {
                weights: input.weights,
                base_discount_rate: input.discount_rate,
            },
        );

        let simple_roi = calculate_simple_roi(input.total_benefits, input.total_costs);
        let annualized_roi = calculate_annualized_roi(simple_roi, f64::from(input.years));
        let npv = calculate_npv(&cash_flows, input.discount_rate);
        let irr = self.irr_solver.solve(&cash_flows);

        let monthly_net_benefit = input.annual_net_benefit() / MONTHS_PER_YEAR;
        let payback_period_months =
            calculate_payback_period(input.initial_investment, monthly_net_benefit);
        let discounted_payback_months =
            calculate_discounted_payback(&input.monthly_cash_flows(), input.discount_rate);

        let benefit_cost_ratio =
            calculate_benefit_cost_ratio(input.total_benefits, input.total_costs);
        let profitability_index =
            calculate_profitability_index(npv + input.initial_investment, input.initial_investment);

        let metrics = FinancialMetrics {
            simple_roi,
            annualized_roi,
            npv,
            irr,
            payback_period_months,
            discounted_payback_months,
            benefit_cost_ratio,
            profitability_index,
            risk_adjusted_roi: simple_roi * risk.risk_multiplier,
            risk_adjusted_npv: calculate_npv(&cash_flows, risk.risk_adjusted_discount_rate),
        };

        tracing::debug!(
            simple_roi,
            npv,
            irr = ?irr,
            risk_multiplier = risk.risk_multiplier,
            "metrics calculated"
        );

        MetricsEvaluation { metrics, risk }
    }

    /// Compute all metrics.
    #[must_use]
    pub fn calculate_all_metrics(&self, input: &MetricsInput) -> FinancialMetrics {
        self.evaluate(input).metrics
    }
}

/// Compute all metrics with the default IRR solver.
#[must_use]
pub fn calculate_all_metrics(input: &MetricsInput) -> FinancialMetrics {
    FinancialEngine::default().calculate_all_metrics(input)
}
