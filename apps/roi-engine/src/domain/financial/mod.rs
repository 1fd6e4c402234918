//! Financial Engine Bounded Context
//!
//! Pure time-value-of-money calculations for investment estimates.
//!
//! # Key Concepts
//!
//! - **Return Metrics**: Simple and annualized ROI, benefit-cost ratio, profitability index
//! - **Discounting**: NPV with period 0 as "now"
//! - **IRR**: Hybrid Newton-Raphson / bisection root finding
//! - **Payback**: Simple and discounted, with `Payback::Never` as the no-recovery sentinel
//! - **Aggregate**: [`calculate_all_metrics`] composes everything with the risk model

mod aggregate;
mod constants;
mod irr;
mod metrics;
mod payback;
mod projection;

pub use aggregate::{
    FinancialEngine, FinancialMetrics, MetricsEvaluation, MetricsInput, calculate_all_metrics,
};
pub use constants::{MAX_HORIZON_YEARS, MONTHS_PER_YEAR};
pub use irr::{IrrSolver, IrrSolverConfig, calculate_irr};
pub use metrics::{
    calculate_annualized_roi, calculate_benefit_cost_ratio, calculate_npv,
    calculate_profitability_index, calculate_simple_roi,
};
pub use payback::{Payback, calculate_discounted_payback, calculate_payback_period};
pub use projection::{CashFlowPeriod, generate_cash_flow_projection};
