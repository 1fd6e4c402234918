//! End-to-end tests for the ROI engine.
//!
//! These tests drive the public API from raw cost/benefit records through
//! config loading, report generation and persistence.

use std::sync::Arc;

use roi_engine::application::dto::{
    BenefitCategory, BenefitItem, CalculatorState, CostCategory, CostItem, ScenarioKind,
};
use roi_engine::application::ports::InMemoryScenarioStore;
use roi_engine::config::load_config_from_string;
use roi_engine::domain::financial::{
    FinancialEngine, MetricsInput, Payback, calculate_all_metrics, calculate_irr,
    calculate_payback_period,
};
use roi_engine::domain::risk_adjustment::{RiskInputs, RiskLevel};
use roi_engine::{
    CalculateRoiUseCase, JsonFileScenarioStore, ManageScenarioUseCase, ScenarioFileError,
    read_scenario,
};
use rust_decimal_macros::dec;

fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

fn claims_triage_state() -> CalculatorState {
    let mut state = CalculatorState::new("Claims triage assistant");
    state.add_cost(CostItem::new(
        "Model integration",
        CostCategory::Implementation,
        dec!(80000),
        dec!(0),
    ));
    state.add_cost(CostItem::new(
        "Change management",
        CostCategory::Training,
        dec!(20000),
        dec!(0),
    ));
    state.add_benefit(BenefitItem::new(
        "Adjuster hours saved",
        BenefitCategory::Productivity,
        dec!(40000),
        dec!(100),
    ));
    state.add_benefit(BenefitItem::new(
        "Fewer leakage payouts",
        BenefitCategory::CostSavings,
        dec!(20000),
        dec!(50),
    ));
    state.set_risk(RiskInputs::uniform(30.0));
    state
}

#[test]
fn test_reference_scenario_end_to_end() {
    let state = claims_triage_state();
    let report = CalculateRoiUseCase::default().execute(&state);

    assert_eq!(report.totals.initial_investment, dec!(100000));
    assert_eq!(report.totals.gross_annual_benefits, dec!(60000));
    assert_eq!(report.totals.annual_benefits, dec!(50000));

    let m = &report.metrics;
    assert!(approx_eq(m.simple_roi, 50.0, 1e-9));
    assert!(approx_eq(report.risk.risk_multiplier, 0.85, 1e-9));
    assert!(approx_eq(m.risk_adjusted_roi, 42.5, 1e-9));
    let Payback::After(payback) = m.payback_period_months else {
        panic!("reference scenario should pay back");
    };
    assert!(approx_eq(payback, 24.0, 1e-9));
    assert!(approx_eq(m.npv, 24_342.60, 0.01));
    assert!(approx_eq(report.risk.risk_adjusted_discount_rate, 16.0, 1e-9));
    assert_eq!(report.risk.risk_level, RiskLevel::Moderate);

    let Some(irr) = m.irr else {
        panic!("reference scenario should have an IRR");
    };
    assert!(approx_eq(irr, 23.375, 1e-2));

    let Payback::After(discounted) = m.discounted_payback_months else {
        panic!("reference scenario should pay back after discounting");
    };
    assert!(discounted > 24.0 && discounted < 36.0);
}

#[test]
fn test_report_lists_scenarios_in_order() {
    let report = CalculateRoiUseCase::default().execute(&claims_triage_state());

    let kinds: Vec<ScenarioKind> = report.scenarios.iter().map(|s| s.scenario).collect();
    assert_eq!(kinds, ScenarioKind::ALL.to_vec());
    assert!(
        report
            .scenarios
            .windows(2)
            .all(|w| w[0].roi < w[1].roi && w[0].npv < w[1].npv)
    );
    assert_eq!(report.projection.len(), 4);
}

#[test]
fn test_irr_undefined_without_sign_change() {
    assert_eq!(calculate_irr(&[100.0, 200.0, 300.0]), None);
    assert_eq!(calculate_irr(&[-100.0, -50.0]), None);
    assert_eq!(calculate_irr(&[]), None);

    let Some(irr) = calculate_irr(&[-1000.0, 1100.0]) else {
        panic!("two-flow series should have an IRR");
    };
    assert!(approx_eq(irr, 10.0, 1e-3));
}

#[test]
fn test_payback_never_without_positive_monthly_benefit() {
    assert_eq!(calculate_payback_period(1000.0, 0.0), Payback::Never);
    assert_eq!(calculate_payback_period(1000.0, -50.0), Payback::Never);
    assert_eq!(Payback::Never.to_string(), "N/A");
}

#[test]
fn test_payback_never_when_costs_exceed_benefits() {
    let input = MetricsInput::from_annual(50_000.0, 30_000.0, 25_000.0, 3, 10.0, RiskInputs::default());
    let metrics = calculate_all_metrics(&input);

    assert_eq!(metrics.payback_period_months, Payback::Never);
    assert_eq!(metrics.discounted_payback_months, Payback::Never);
    assert_eq!(metrics.irr, None);
    assert!(metrics.simple_roi < 0.0);

    let json = serde_json::to_value(metrics).unwrap();
    assert_eq!(json["paybackPeriodMonths"], "never");
    assert!(json["irr"].is_null());
}

#[test]
fn test_config_weights_drive_the_use_case() {
    let config = load_config_from_string(
        r"
risk_model:
  weights:
    implementation: 1.0
    adoption: 0.0
    technical: 0.0
    market: 0.0
irr:
  max_iterations: 200
",
    )
    .unwrap();

    let mut state = claims_triage_state();
    state.set_risk(RiskInputs::new(80.0, 0.0, 0.0, 0.0));

    let use_case = CalculateRoiUseCase::new(
        FinancialEngine::new(config.irr_solver()),
        config.risk_model.weights,
    );
    let report = use_case.execute(&state);

    assert!(approx_eq(report.risk.weighted_average_risk, 80.0, 1e-9));
    assert!(approx_eq(report.risk.average_risk, 20.0, 1e-9));
    assert!(approx_eq(report.risk.risk_multiplier, 0.60, 1e-9));
    assert_eq!(report.risk.risk_level, RiskLevel::High);
}

#[test]
fn test_scenario_file_formats_parse() {
    let yaml = r"
name: Support deflection
years: 2
discountRate: 8
costs:
  - name: Pilot
    category: implementation
    oneTime: 30000
    recurringAnnual: 5000
benefits:
  - name: Tickets deflected
    category: costSavings
    annualValue: 40000
    confidence: 75
risk:
  implementationRisk: 20
  adoptionRisk: 40
  technicalRisk: 30
  marketRisk: 10
";
    let state: CalculatorState = serde_yaml_bw::from_str(yaml).unwrap();
    assert_eq!(state.years, 2);
    assert_eq!(state.totals().annual_benefits, dec!(30000));

    let json = serde_json::to_string(&state).unwrap();
    let from_json: CalculatorState = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, state);

    let report = CalculateRoiUseCase::default().execute(&state);
    // (60000 - 40000) / 40000
    assert!(approx_eq(report.metrics.simple_roi, 50.0, 1e-9));
}

#[test]
fn test_scenario_without_rate_uses_config_base_rate() {
    let config = load_config_from_string(
        r"
risk_model:
  base_discount_rate: 8
",
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.yaml");
    std::fs::write(
        &path,
        r"
name: Contract review
years: 3
costs:
  - name: Licences
    oneTime: 50000
benefits:
  - name: Paralegal hours
    annualValue: 30000
risk:
  implementationRisk: 30
  adoptionRisk: 30
  technicalRisk: 30
  marketRisk: 30
",
    )
    .unwrap();

    let state = read_scenario(&path, config.risk_model.base_discount_rate).unwrap();
    assert!(approx_eq(state.discount_rate, 8.0, 1e-9));

    let use_case = CalculateRoiUseCase::new(
        FinancialEngine::new(config.irr_solver()),
        config.risk_model.weights,
    );
    let report = use_case.execute(&state);
    // 8 + 30 * 0.2 premium
    assert!(approx_eq(report.risk.risk_adjusted_discount_rate, 14.0, 1e-9));
}

#[test]
fn test_scenario_file_keeps_explicit_rate_and_rejects_oversized_horizon() {
    let dir = tempfile::tempdir().unwrap();

    let explicit = dir.path().join("explicit.yaml");
    std::fs::write(&explicit, "name: Explicit\ndiscountRate: 12\n").unwrap();
    let state = read_scenario(&explicit, 8.0).unwrap();
    assert!(approx_eq(state.discount_rate, 12.0, 1e-9));

    let oversized = dir.path().join("oversized.yaml");
    std::fs::write(&oversized, "name: Forever\nyears: 1000\n").unwrap();
    assert!(matches!(
        read_scenario(&oversized, 8.0),
        Err(ScenarioFileError::ValidationError(_))
    ));
}

#[test]
fn test_saved_scenario_reproduces_report() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileScenarioStore::new(dir.path()));
    let manager = ManageScenarioUseCase::new(Arc::clone(&store));
    let use_case = CalculateRoiUseCase::default();

    let state = claims_triage_state();
    let before = use_case.execute(&state);
    manager.save(&state).unwrap();

    let restored = manager.load_or_default().unwrap();
    assert_eq!(restored, state);
    assert_eq!(use_case.execute(&restored), before);

    manager.reset().unwrap();
    assert_eq!(manager.load().unwrap(), None);
}

#[test]
fn test_in_memory_store_keys_are_independent() {
    let store = Arc::new(InMemoryScenarioStore::new());
    let first = ManageScenarioUseCase::with_key(Arc::clone(&store), "first");
    let second = ManageScenarioUseCase::with_key(Arc::clone(&store), "second");

    first.save(&claims_triage_state()).unwrap();
    assert!(second.load().unwrap().is_none());
    assert_eq!(store.len(), 1);
}
