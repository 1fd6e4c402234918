//! Project totals aggregated from raw records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::records_dto::{BenefitItem, CostItem};

/// Sums of cost and benefit records over the analysis horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTotals {
    /// Sum of one-time costs.
    pub initial_investment: Decimal,
    /// Sum of recurring annual costs.
    pub annual_costs: Decimal,
    /// Initial investment plus recurring costs over the horizon.
    pub total_cost_of_ownership: Decimal,
    /// Sum of annual benefit values before confidence weighting.
    pub gross_annual_benefits: Decimal,
    /// Sum of confidence-weighted annual benefits.
    pub annual_benefits: Decimal,
    /// Confidence-weighted benefits over the horizon.
    pub total_benefits: Decimal,
}

impl ProjectTotals {
    /// Aggregate records over `years`.
    ///
    /// Sums and products saturate at the `Decimal` range instead of panicking.
    #[must_use]
    pub fn aggregate(costs: &[CostItem], benefits: &[BenefitItem], years: u32) -> Self {
        let horizon = Decimal::from(years);

        let initial_investment = saturating_sum(costs.iter().map(|c| c.one_time));
        let annual_costs = saturating_sum(costs.iter().map(|c| c.recurring_annual));
        let gross_annual_benefits = saturating_sum(benefits.iter().map(|b| b.annual_value));
        let annual_benefits = saturating_sum(benefits.iter().map(BenefitItem::weighted_annual_value));

        Self {
            initial_investment,
            annual_costs,
            total_cost_of_ownership: initial_investment
                .saturating_add(annual_costs.saturating_mul(horizon)),
            gross_annual_benefits,
            annual_benefits,
            total_benefits: annual_benefits.saturating_mul(horizon),
        }
    }
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}
