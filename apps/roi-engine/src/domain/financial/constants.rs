//! Numeric constants shared by the financial calculations.

/// Percent scale.
pub const HUNDRED: f64 = 100.0;
/// Months in a year, for monthly payback granularity.
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Longest horizon the cash-flow series are generated for.
pub const MAX_HORIZON_YEARS: u32 = 100;
