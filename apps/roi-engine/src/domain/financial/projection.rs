//! Yearly cash-flow projection.

use serde::{Deserialize, Serialize};

use super::constants::{HUNDRED, MAX_HORIZON_YEARS};

/// One period of a cash-flow projection. Period 0 is the initial investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPeriod {
    /// Period index.
    pub period: u32,
    /// Outflow in this period.
    pub costs: f64,
    /// Inflow in this period.
    pub benefits: f64,
    /// `benefits - costs`.
    pub net_cash_flow: f64,
    /// Running sum of net cash flow.
    pub cumulative_cash_flow: f64,
    /// Net cash flow discounted to period 0.
    pub discounted_cash_flow: f64,
    /// Running sum of discounted cash flow.
    pub cumulative_discounted_cash_flow: f64,
}

/// Build a projection with a pure outflow at period 0 and constant annual
/// costs and benefits for years `1..=years`.
///
/// Benefit ramp-up is not modelled here. `years` is capped at
/// [`MAX_HORIZON_YEARS`].
#[must_use]
pub fn generate_cash_flow_projection(
    initial_investment: f64,
    annual_costs: f64,
    annual_benefits: f64,
    years: u32,
    discount_rate: f64,
) -> Vec<CashFlowPeriod> {
    let years = years.min(MAX_HORIZON_YEARS);
    let factor = 1.0 + discount_rate / HUNDRED;
    let mut periods = Vec::with_capacity(years as usize + 1);

    periods.push(CashFlowPeriod {
        period: 0,
        costs: initial_investment,
        benefits: 0.0,
        net_cash_flow: -initial_investment,
        cumulative_cash_flow: -initial_investment,
        discounted_cash_flow: -initial_investment,
        cumulative_discounted_cash_flow: -initial_investment,
    });

    let net = annual_benefits - annual_costs;
    let mut cumulative = -initial_investment;
    let mut cumulative_discounted = -initial_investment;

    for year in 1..=years {
        let discounted = net / factor.powi(i32::try_from(year).unwrap_or(i32::MAX));
        cumulative += net;
        cumulative_discounted += discounted;

        periods.push(CashFlowPeriod {
            period: year,
            costs: annual_costs,
            benefits: annual_benefits,
            net_cash_flow: net,
            cumulative_cash_flow: cumulative,
            discounted_cash_flow: discounted,
            cumulative_discounted_cash_flow: cumulative_discounted,
        });
    }

    periods
}
