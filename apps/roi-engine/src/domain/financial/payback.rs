//! Payback period calculations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{HUNDRED, MONTHS_PER_YEAR};

/// Time until the investment is recovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payback {
    /// Recovered after this many (possibly fractional) periods.
    After(f64),
    /// Never recovered within the horizon.
    Never,
}

impl Payback {
    /// Periods until payback, if it happens.
    #[must_use]
    pub const fn periods(&self) -> Option<f64> {
        match self {
            Self::After(periods) => Some(*periods),
            Self::Never => None,
        }
    }

    /// True when the investment is never recovered.
    #[must_use]
    pub const fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::After(periods) => write!(f, "{periods:.1}"),
            Self::Never => f.write_str("N/A"),
        }
    }
}

/// Simple payback in months: `initial_investment / monthly_net_benefit`.
///
/// A non-positive monthly benefit never pays back.
#[must_use]
pub fn calculate_payback_period(initial_investment: f64, monthly_net_benefit: f64) -> Payback {
    if monthly_net_benefit <= 0.0 {
        return Payback::Never;
    }
    Payback::After(initial_investment / monthly_net_benefit)
}

/// Discounted payback over a monthly cash-flow sequence.
///
/// `discount_rate` is an annual percentage, applied monthly as
/// `discount_rate / 100 / 12`. The crossing period is interpolated linearly
/// between the two cumulative values that straddle zero.
#[must_use]
pub fn calculate_discounted_payback(cash_flows: &[f64], discount_rate: f64) -> Payback {
    let factor = 1.0 + discount_rate / HUNDRED / MONTHS_PER_YEAR;
    let mut cumulative = 0.0;

    for (t, cf) in cash_flows.iter().enumerate() {
        let previous = cumulative;
        cumulative += cf / factor.powi(t as i32);

        if cumulative >= 0.0 {
            if t == 0 {
                return Payback::After(0.0);
            }
            let fraction = -previous / (cumulative - previous);
            return Payback::After((t - 1) as f64 + fraction);
        }
    }

    Payback::Never
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    fn periods(payback: Payback) -> f64 {
        match payback {
            Payback::After(periods) => periods,
            Payback::Never => panic!("expected payback to occur"),
        }
    }

    #[test]
    fn simple_payback_divides() {
        assert!(approx_eq(periods(calculate_payback_period(1_000.0, 100.0)), 10.0, 1e-12));
        assert!(approx_eq(
            periods(calculate_payback_period(100_000.0, 50_000.0 / 12.0)),
            24.0,
            1e-9
        ));
    }

    #[test]
    fn simple_payback_never_without_benefit() {
        assert_eq!(calculate_payback_period(1_000.0, 0.0), Payback::Never);
        assert_eq!(calculate_payback_period(1_000.0, -50.0), Payback::Never);
    }

    #[test]
    fn discounted_payback_at_zero_rate_interpolates() {
        // Cumulative: -1000, -600, -200, 200 -> crosses halfway through period 3
        let flows = [-1_000.0, 400.0, 400.0, 400.0];
        assert!(approx_eq(periods(calculate_discounted_payback(&flows, 0.0)), 2.5, 1e-12));
    }

    #[test]
    fn discounted_payback_is_later_than_simple() {
        let mut flows = vec![-12_000.0];
        flows.extend(std::iter::repeat_n(1_000.0, 24));

        let undiscounted = periods(calculate_discounted_payback(&flows, 0.0));
        let discounted = periods(calculate_discounted_payback(&flows, 12.0));
        assert!(approx_eq(undiscounted, 12.0, 1e-9));
        assert!(discounted > undiscounted);
        assert!(discounted < 13.0);
    }

    #[test]
    fn discounted_payback_exact_crossing() {
        let flows = [-500.0, 250.0, 250.0];
        assert!(approx_eq(periods(calculate_discounted_payback(&flows, 0.0)), 2.0, 1e-12));
    }

    #[test]
    fn discounted_payback_never_within_horizon() {
        let flows = [-1_000.0, 100.0, 100.0];
        assert_eq!(calculate_discounted_payback(&flows, 10.0), Payback::Never);
        assert_eq!(calculate_discounted_payback(&[], 10.0), Payback::Never);
    }

    #[test]
    fn discounted_payback_without_investment_is_immediate() {
        assert_eq!(
            calculate_discounted_payback(&[0.0, 50.0], 10.0),
            Payback::After(0.0)
        );
    }

    #[test]
    fn payback_display_and_accessors() {
        assert_eq!(Payback::After(23.96).to_string(), "24.0");
        assert_eq!(Payback::Never.to_string(), "N/A");
        assert!(Payback::Never.is_never());
        assert_eq!(Payback::After(3.0).periods(), Some(3.0));
        assert_eq!(Payback::Never.periods(), None);
    }
}
