//! Calculate ROI Use Case

use crate::application::dto::{CalculatorState, RoiReport, ScenarioKind, ScenarioOutcome};
use crate::domain::financial::{
    FinancialEngine, MetricsInput, calculate_npv, calculate_simple_roi,
    generate_cash_flow_projection,
};
use crate::domain::risk_adjustment::{RiskWeights, ScenarioAnalysis};

/// Use case for turning calculator state into a full ROI report.
#[derive(Debug, Clone, Default)]
pub struct CalculateRoiUseCase {
    engine: FinancialEngine,
    weights: RiskWeights,
}

impl CalculateRoiUseCase {
    /// Create a new CalculateRoiUseCase.
    #[must_use]
    pub const fn new(engine: FinancialEngine, weights: RiskWeights) -> Self {
        Self { engine, weights }
    }

    /// Execute the use case.
    #[must_use]
    pub fn execute(&self, state: &CalculatorState) -> RoiReport {
        let span = tracing::debug_span!("calculate_roi", scenario_id = %state.id);
        let _enter = span.enter();

        // 1. Aggregate raw records
        let totals = state.totals();
        let input = state.to_metrics_input(self.weights);

        // 2. Run the engine
        let evaluation = self.engine.evaluate(&input);

        // 3. Yearly projection for display
        let projection = generate_cash_flow_projection(
            input.initial_investment,
            input.annual_costs,
            input.annual_benefits,
            input.years,
            input.discount_rate,
        );

        // 4. Scenario outcomes
        let scenarios = scenario_outcomes(&input, &evaluation.risk.scenario_analysis);

        tracing::info!(
            name = %state.name,
            years = state.years,
            simple_roi = evaluation.metrics.simple_roi,
            risk_level = %evaluation.risk.risk_level,
            "ROI report computed"
        );

        RoiReport {
            scenario_id: state.id,
            name: state.name.clone(),
            totals,
            metrics: evaluation.metrics,
            risk: evaluation.risk,
            projection,
            scenarios,
        }
    }
}

fn scenario_outcomes(input: &MetricsInput, analysis: &ScenarioAnalysis) -> Vec<ScenarioOutcome> {
    ScenarioKind::ALL
        .iter()
        .map(|kind| {
            let multiplier = match kind {
                ScenarioKind::Pessimistic => analysis.pessimistic,
                ScenarioKind::Baseline => analysis.baseline,
                ScenarioKind::Optimistic => analysis.optimistic,
            };
            let adjusted = MetricsInput::from_annual(
                input.initial_investment,
                input.annual_costs,
                input.annual_benefits * multiplier,
                input.years,
                input.discount_rate,
                input.risk,
            );
            ScenarioOutcome {
                scenario: *kind,
                multiplier,
                adjusted_annual_benefits: adjusted.annual_benefits,
                roi: calculate_simple_roi(adjusted.total_benefits, input.total_costs),
                npv: calculate_npv(&adjusted.yearly_cash_flows(), input.discount_rate),
            }
        })
        .collect()
}
