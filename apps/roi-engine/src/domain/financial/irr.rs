//! Internal Rate of Return Solver
//!
//! Finds the periodic rate at which NPV is zero using a hybrid method:
//! - Newton-Raphson: Fast convergence using the analytic NPV derivative
//! - Damped step: Halfway to the violated bound when Newton would leave the search range
//! - Bisection: Fallback when the derivative is too flat for a safe Newton step
//!
//! A cash-flow sequence without both a positive and a negative flow has no
//! root, and neither does one whose root lies outside the search bounds.
//! Both report `None`, which callers render as "N/A".

use serde::{Deserialize, Serialize};

use super::constants::HUNDRED;
use super::metrics::present_value;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the IRR solver.
///
/// Rates here are fractional (0.1 = 10%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrSolverConfig {
    /// Starting rate for Newton-Raphson.
    pub guess: f64,
    /// Lowest rate searched (-0.99 = -99%).
    pub lower_bound: f64,
    /// Highest rate searched (10.0 = 1000%).
    pub upper_bound: f64,
    /// Hard iteration cap.
    pub max_iterations: u32,
    /// Absolute NPV below which the rate is accepted.
    pub npv_tolerance: f64,
    /// Derivative magnitude below which Newton is unsafe.
    pub derivative_epsilon: f64,
    /// Rate movement below which the iteration has converged.
    pub step_tolerance: f64,
}

impl Default for IrrSolverConfig {
    fn default() -> Self {
        Self {
            guess: 0.1,
            lower_bound: -0.99,
            upper_bound: 10.0,
            max_iterations: 1000,
            npv_tolerance: 1e-5,
            derivative_epsilon: 1e-10,
            step_tolerance: 1e-10,
        }
    }
}

// ============================================================================
// NPV Helpers
// ============================================================================

/// Analytic derivative of NPV with respect to the fractional rate.
fn npv_derivative(cash_flows: &[f64], rate: f64) -> f64 {
    let factor = 1.0 + rate;
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, cf)| -(t as f64) * cf / factor.powi(t as i32 + 1))
        .sum()
}

/// True when the sequence has at least one inflow and one outflow.
fn has_sign_change(cash_flows: &[f64]) -> bool {
    let has_positive = cash_flows.iter().any(|cf| *cf > 0.0);
    let has_negative = cash_flows.iter().any(|cf| *cf < 0.0);
    has_positive && has_negative
}

/// Halve `[low, high]` toward the root and return the midpoint.
///
/// Returns `None` and leaves the bounds untouched when NPV has the same sign
/// at both ends.
fn bisect(cash_flows: &[f64], low: &mut f64, high: &mut f64) -> Option<f64> {
    let npv_low = present_value(cash_flows, *low);
    let npv_high = present_value(cash_flows, *high);
    if npv_low.signum() == npv_high.signum() {
        return None;
    }

    let mid = low.midpoint(*high);
    if npv_low.signum() == present_value(cash_flows, mid).signum() {
        *low = mid;
    } else {
        *high = mid;
    }
    Some(mid)
}

// ============================================================================
// Solver
// ============================================================================

/// IRR solver.
#[derive(Debug, Clone, Default)]
pub struct IrrSolver {
    config: IrrSolverConfig,
}

impl IrrSolver {
    /// Create a new IRR solver with the given configuration.
    #[must_use]
    pub const fn new(config: IrrSolverConfig) -> Self {
        Self { config }
    }

    /// Solver configuration.
    #[must_use]
    pub const fn config(&self) -> &IrrSolverConfig {
        &self.config
    }

    /// Solve for IRR, returned as a percentage.
    ///
    /// Returns `None` when no sign change exists, when the root sits outside
    /// the search bounds, or when the iteration cap is reached.
    #[must_use]
    pub fn solve(&self, cash_flows: &[f64]) -> Option<f64> {
        if !has_sign_change(cash_flows) {
            return None;
        }

        let cfg = &self.config;
        let mut low = cfg.lower_bound;
        let mut high = cfg.upper_bound;
        let mut rate = cfg.guess.clamp(low, high);

        for iteration in 0..cfg.max_iterations {
            let npv = present_value(cash_flows, rate);

            if npv.abs() < cfg.npv_tolerance {
                tracing::trace!(iteration, rate, "IRR converged on NPV tolerance");
                return Some(rate * HUNDRED);
            }

            let derivative = npv_derivative(cash_flows, rate);

            if derivative.abs() < cfg.derivative_epsilon {
                // Flat slope, take one bisection step instead
                rate = bisect(cash_flows, &mut low, &mut high)
                    .unwrap_or_else(|| low.midpoint(high));
                continue;
            }

            let newton = rate - npv / derivative;
            if !(low..=high).contains(&newton) {
                // Out of bounds: bisect while a root is bracketed, else damp
                if let Some(mid) = bisect(cash_flows, &mut low, &mut high) {
                    rate = mid;
                    continue;
                }
            }

            let (next, damped) = if newton < low {
                (rate.midpoint(low), true)
            } else if newton > high {
                (rate.midpoint(high), true)
            } else {
                (newton, false)
            };

            if (next - rate).abs() < cfg.step_tolerance {
                if damped {
                    // Pinned against a bound: the root is outside the search range
                    tracing::trace!(iteration, rate, "IRR pinned at search bound");
                    return None;
                }
                tracing::trace!(iteration, rate = next, "IRR converged on step tolerance");
                return Some(next * HUNDRED);
            }

            rate = next;
        }

        tracing::debug!(
            iterations = cfg.max_iterations,
            last_rate = rate,
            "IRR could not be determined"
        );
        None
    }
}

/// Solve IRR with the default solver configuration.
#[must_use]
pub fn calculate_irr(cash_flows: &[f64]) -> Option<f64> {
    IrrSolver::default().solve(cash_flows)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::financial::metrics::calculate_npv;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    fn solve(cash_flows: &[f64]) -> f64 {
        match calculate_irr(cash_flows) {
            Some(irr) => irr,
            None => panic!("IRR should exist for {cash_flows:?}"),
        }
    }

    #[test]
    fn test_irr_single_period() {
        // NPV at 10% = -1000 + 1100/1.1 = 0
        assert!(approx_eq(solve(&[-1_000.0, 1_100.0]), 10.0, 1e-6));
    }

    #[test]
    fn test_irr_all_positive_is_none() {
        assert_eq!(calculate_irr(&[100.0, 200.0, 300.0]), None);
    }

    #[test]
    fn test_irr_all_negative_is_none() {
        assert_eq!(calculate_irr(&[-100.0, -50.0]), None);
    }

    #[test]
    fn test_irr_empty_and_zero_flows_are_none() {
        assert_eq!(calculate_irr(&[]), None);
        assert_eq!(calculate_irr(&[0.0, 0.0, 0.0]), None);
    }

    #[test]
    fn test_irr_annuity_zeroes_npv() {
        let flows = [-100_000.0, 50_000.0, 50_000.0, 50_000.0];
        let irr = solve(&flows);
        // Known value ~23.375%
        assert!(approx_eq(irr, 23.375, 0.01));
        assert!(approx_eq(calculate_npv(&flows, irr), 0.0, 1e-3));
    }

    #[test]
    fn test_irr_negative_rate() {
        // Lose 20% over one period
        assert!(approx_eq(solve(&[-1_000.0, 800.0]), -20.0, 1e-6));
    }

    #[test]
    fn test_irr_high_rate() {
        // Triple the money in one period: 200%
        assert!(approx_eq(solve(&[-100.0, 300.0]), 200.0, 1e-6));
    }

    #[test]
    fn test_irr_large_magnitudes_converge_on_step() {
        let flows = [-4.0e9, 1.5e9, 1.5e9, 1.5e9, 1.5e9];
        let irr = solve(&flows);
        let npv = calculate_npv(&flows, irr);
        assert!(npv.abs() / 4.0e9 < 1e-9);
    }

    #[test]
    fn test_irr_flat_slope_at_guess_still_finds_root() {
        // Derivative vanishes at the default 10% guess; roots near -34% and 234%
        let flows = [-0.5, 2.0, -1.1];
        assert!(npv_derivative(&flows, 0.1).abs() < IrrSolverConfig::default().derivative_epsilon);

        let irr = solve(&flows);
        assert!((-99.0..=1_000.0).contains(&irr));
        assert!(approx_eq(calculate_npv(&flows, irr), 0.0, 1e-4));
    }

    #[test]
    fn test_irr_flat_slope_with_bracketed_root() {
        // NPV changes sign over [-99%, 200%], so bisection narrows toward ~-34%
        let solver = IrrSolver::new(IrrSolverConfig {
            upper_bound: 2.0,
            ..IrrSolverConfig::default()
        });
        let Some(irr) = solver.solve(&[-0.5, 2.0, -1.1]) else {
            panic!("IRR should exist inside [-99%, 200%]");
        };
        assert!(approx_eq(irr, -34.164, 1e-2));
    }

    #[test]
    fn test_bisect_leaves_unbracketed_bounds_alone() {
        let flows = [-0.5, 2.0, -1.1];
        let (mut low, mut high) = (-0.99, 10.0);
        assert_eq!(bisect(&flows, &mut low, &mut high), None);
        assert_eq!((low, high), (-0.99, 10.0));

        let mut high = 2.0;
        assert_eq!(bisect(&flows, &mut low, &mut high), Some(low.midpoint(2.0)));
        assert!(high < 2.0);
    }

    #[test]
    fn test_irr_root_beyond_upper_bound_is_none() {
        // A 10,000% return sits outside the +1000% search range
        assert_eq!(calculate_irr(&[-1.0, 101.0]), None);
    }

    #[test]
    fn test_irr_root_below_lower_bound_is_none() {
        // -99.5% sits below the -99% floor
        assert_eq!(calculate_irr(&[-100.0, 0.5]), None);
    }

    #[test]
    fn test_irr_custom_guess() {
        let solver = IrrSolver::new(IrrSolverConfig {
            guess: 2.5,
            ..IrrSolverConfig::default()
        });
        let Some(irr) = solver.solve(&[-1_000.0, 1_100.0]) else {
            panic!("IRR should converge from a distant guess");
        };
        assert!(approx_eq(irr, 10.0, 1e-6));
    }

    #[test]
    fn test_irr_iteration_cap() {
        let solver = IrrSolver::new(IrrSolverConfig {
            max_iterations: 0,
            ..IrrSolverConfig::default()
        });
        assert_eq!(solver.solve(&[-1_000.0, 1_100.0]), None);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let flows = [-500.0, 200.0, 200.0, 200.0];
        let rate = 0.07;
        let h = 1e-6;
        let numeric = (present_value(&flows, rate + h) - present_value(&flows, rate - h)) / (2.0 * h);
        assert!(approx_eq(npv_derivative(&flows, rate), numeric, 1e-3));
    }

    #[test]
    fn test_irr_is_deterministic() {
        let flows = [-250_000.0, 40_000.0, 90_000.0, 120_000.0, 60_000.0];
        assert_eq!(
            calculate_irr(&flows).map(f64::to_bits),
            calculate_irr(&flows).map(f64::to_bits)
        );
    }
}
