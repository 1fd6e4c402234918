//! Closed-form return metrics.
//!
//! Every function returns a neutral value instead of failing when its
//! denominator is non-positive.

use super::constants::HUNDRED;

/// Simple ROI as a percentage: `(benefits - costs) / costs * 100`.
///
/// Returns 0 when `total_costs <= 0`.
#[must_use]
pub fn calculate_simple_roi(total_benefits: f64, total_costs: f64) -> f64 {
    if total_costs <= 0.0 {
        return 0.0;
    }
    (total_benefits - total_costs) / total_costs * HUNDRED
}

/// Compound annual ROI from a simple ROI spread over `years`.
///
/// Returns 0 when `years <= 0`, and -100 when the growth base `1 + roi/100`
/// is non-positive (total loss or worse has no real root).
#[must_use]
pub fn calculate_annualized_roi(simple_roi: f64, years: f64) -> f64 {
    if years <= 0.0 {
        return 0.0;
    }
    let base = 1.0 + simple_roi / HUNDRED;
    if base <= 0.0 {
        return -HUNDRED;
    }
    (base.powf(1.0 / years) - 1.0) * HUNDRED
}

/// Net present value of `cash_flows` at `discount_rate` percent per period.
///
/// Index 0 is "now" and is not discounted.
#[must_use]
pub fn calculate_npv(cash_flows: &[f64], discount_rate: f64) -> f64 {
    present_value(cash_flows, discount_rate / HUNDRED)
}

/// Present value at a fractional periodic rate.
pub(crate) fn present_value(cash_flows: &[f64], rate: f64) -> f64 {
    let factor = 1.0 + rate;
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / factor.powi(t as i32))
        .sum()
}

/// Benefits per unit of cost. Returns 0 when `total_costs <= 0`.
#[must_use]
pub fn calculate_benefit_cost_ratio(total_benefits: f64, total_costs: f64) -> f64 {
    if total_costs <= 0.0 {
        return 0.0;
    }
    total_benefits / total_costs
}

/// Present value of future flows per unit of initial investment.
///
/// Returns 0 when `initial_investment <= 0`.
#[must_use]
pub fn calculate_profitability_index(
    present_value_of_future_flows: f64,
    initial_investment: f64,
) -> f64 {
    if initial_investment <= 0.0 {
        return 0.0;
    }
    present_value_of_future_flows / initial_investment
}
