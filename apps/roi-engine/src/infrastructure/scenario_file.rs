//! Scenario documents
//!
//! Reads a [`CalculatorState`] from YAML (or JSON, which the YAML parser also
//! accepts). A document without `discountRate` takes the caller's base rate
//! instead of the built-in default.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::application::dto::CalculatorState;
use crate::domain::financial::MAX_HORIZON_YEARS;

/// Scenario document errors.
#[derive(Debug, Error)]
pub enum ScenarioFileError {
    /// Failed to read the scenario file.
    #[error("Failed to read scenario file '{path}': {source}")]
    ReadError {
        /// Path to the scenario file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse the document.
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Document parsed but holds unusable values.
    #[error("Scenario validation failed: {0}")]
    ValidationError(String),
}

/// Fields whose absence changes how the document is read.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExplicitFields {
    #[serde(default)]
    discount_rate: Option<f64>,
}

/// Parse a scenario document.
///
/// `default_discount_rate` (percent) applies when `discountRate` is absent.
pub fn parse_scenario(
    contents: &str,
    default_discount_rate: f64,
) -> Result<CalculatorState, ScenarioFileError> {
    let explicit: ExplicitFields = serde_yaml_bw::from_str(contents)?;
    let mut state: CalculatorState = serde_yaml_bw::from_str(contents)?;

    if explicit.discount_rate.is_none() {
        tracing::debug!(
            discount_rate = default_discount_rate,
            "scenario has no discountRate, using base rate"
        );
        state.discount_rate = default_discount_rate;
    }

    validate_scenario(&state)?;
    Ok(state)
}

/// Read and parse a scenario file.
pub fn read_scenario(
    path: &Path,
    default_discount_rate: f64,
) -> Result<CalculatorState, ScenarioFileError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ScenarioFileError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_scenario(&contents, default_discount_rate)
}

fn validate_scenario(state: &CalculatorState) -> Result<(), ScenarioFileError> {
    if state.years > MAX_HORIZON_YEARS {
        return Err(ScenarioFileError::ValidationError(format!(
            "years must be at most {MAX_HORIZON_YEARS}, got {}",
            state.years
        )));
    }
    if !state.discount_rate.is_finite() || state.discount_rate <= -100.0 {
        return Err(ScenarioFileError::ValidationError(
            "discountRate must be finite and greater than -100".to_string(),
        ));
    }
    Ok(())
}
