//! Cost and benefit record DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of project cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostCategory {
    /// Integration and build-out work.
    Implementation,
    /// Model, API or software licences.
    Licensing,
    /// Compute, storage and hosting.
    Infrastructure,
    /// Staff dedicated to the project.
    Personnel,
    /// Upskilling and change management.
    Training,
    /// Anything else.
    #[default]
    Other,
}

/// Kind of project benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BenefitCategory {
    /// Reduced operating spend.
    CostSavings,
    /// New or retained revenue.
    Revenue,
    /// Hours recovered from automation.
    Productivity,
    /// Avoided losses or penalties.
    RiskReduction,
    /// Anything else.
    #[default]
    Other,
}

/// One cost line with a one-time and a recurring component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    /// Display name.
    pub name: String,
    /// Cost category.
    #[serde(default)]
    pub category: CostCategory,
    /// Up-front amount, spent at period 0.
    #[serde(default)]
    pub one_time: Decimal,
    /// Amount spent every year of the horizon.
    #[serde(default)]
    pub recurring_annual: Decimal,
}

impl CostItem {
    /// Create a cost item.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: CostCategory,
        one_time: Decimal,
        recurring_annual: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            one_time,
            recurring_annual,
        }
    }
}

/// One benefit line with an annual value and a confidence percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitItem {
    /// Display name.
    pub name: String,
    /// Benefit category.
    #[serde(default)]
    pub category: BenefitCategory,
    /// Expected value per year.
    pub annual_value: Decimal,
    /// Confidence in the estimate, percent 0-100.
    #[serde(default = "full_confidence")]
    pub confidence: Decimal,
}

impl BenefitItem {
    /// Create a benefit item.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: BenefitCategory,
        annual_value: Decimal,
        confidence: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            annual_value,
            confidence,
        }
    }

    /// Annual value scaled by confidence. Saturates at the `Decimal` range.
    #[must_use]
    pub fn weighted_annual_value(&self) -> Decimal {
        self.annual_value
            .saturating_mul(self.confidence / Decimal::ONE_HUNDRED)
    }
}

const fn full_confidence() -> Decimal {
    Decimal::ONE_HUNDRED
}
