//! Domain Layer
//!
//! The innermost layer containing the calculation logic with zero
//! infrastructure dependencies. Every function here is a deterministic,
//! side-effect-free computation over its arguments.
//!
//! # Bounded Contexts
//!
//! - [`risk_adjustment`]: Four risk scores to a multiplier, discount premium and scenarios
//! - [`financial`]: ROI, NPV, IRR, payback and cash-flow projection

pub mod financial;
pub mod risk_adjustment;
