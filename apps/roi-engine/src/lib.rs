// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! ROI Engine - Rust Core Library
//!
//! Deterministic financial engine behind an AI investment ROI calculator.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure numeric functions with no IO
//!   - `risk_adjustment`: Four risk scores to multiplier, premium, scenarios
//!   - `financial`: ROI, NPV, IRR, payback, projections, metric bundle
//!
//! - **Application**: Use cases and orchestration
//!   - `dto`: Cost/benefit records, calculator state, report
//!   - `ports`: `ScenarioStorePort` for caller-owned persistence
//!   - `use_cases`: `CalculateRoi`, `ManageScenario`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: JSON file scenario store
//!   - `scenario_file`: YAML/JSON scenario documents
//!
//! - **Config**: YAML settings for the risk model, IRR solver and logging

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core financial math with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Supporting Modules
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::financial::{
    CashFlowPeriod, FinancialEngine, FinancialMetrics, IrrSolver, IrrSolverConfig, MetricsInput,
    Payback, calculate_all_metrics, calculate_irr,
};
pub use domain::risk_adjustment::{
    RiskAdjustedOutput, RiskInputs, RiskLevel, RiskModelConfig, RiskWeights,
    calculate_risk_adjustment,
};

// Application re-exports
pub use application::dto::{BenefitItem, CalculatorState, CostItem, RoiReport};
pub use application::ports::{ScenarioStorePort, StoreError};
pub use application::use_cases::{CalculateRoiUseCase, ManageScenarioUseCase};

// Infrastructure re-exports
pub use infrastructure::persistence::JsonFileScenarioStore;
pub use infrastructure::scenario_file::{ScenarioFileError, parse_scenario, read_scenario};

// Config re-exports
pub use config::{Config, ConfigError, load_config};
