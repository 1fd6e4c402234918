//! Configuration module for the ROI engine.
//!
//! Loads the risk model, IRR solver and logging settings from YAML with
//! environment variable interpolation, then validates them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use roi_engine::config::{Config, load_config};
//!
//! // Load from default path (roi-engine.yaml)
//! let config = load_config(None)?;
//!
//! // Access configuration values
//! println!("base rate: {}", config.risk_model.base_discount_rate);
//! ```

mod observability;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};

use crate::domain::financial::{IrrSolver, IrrSolverConfig};
use crate::domain::risk_adjustment::RiskModelConfig;

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "roi-engine.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Risk weights and base discount rate.
    #[serde(default)]
    pub risk_model: RiskModelConfig,
    /// IRR solver settings.
    #[serde(default)]
    pub irr: IrrSolverConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// IRR solver built from the `irr` section.
    #[must_use]
    pub const fn irr_solver(&self) -> IrrSolver {
        IrrSolver::new(self.irr)
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to [`DEFAULT_CONFIG_PATH`].
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Static pattern
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match cap.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(v)) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let weights = config.risk_model.weights.as_array();
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ConfigError::ValidationError(
            "risk_model.weights must be finite and non-negative".to_string(),
        ));
    }

    let base = config.risk_model.base_discount_rate;
    if !base.is_finite() || !(-100.0..=1000.0).contains(&base) {
        return Err(ConfigError::ValidationError(
            "risk_model.base_discount_rate must be between -100 and 1000".to_string(),
        ));
    }

    let irr = &config.irr;
    if irr.lower_bound <= -1.0 {
        return Err(ConfigError::ValidationError(
            "irr.lower_bound must be greater than -1.0".to_string(),
        ));
    }
    if irr.lower_bound >= irr.upper_bound {
        return Err(ConfigError::ValidationError(
            "irr.lower_bound must be less than irr.upper_bound".to_string(),
        ));
    }
    if irr.max_iterations == 0 {
        return Err(ConfigError::ValidationError(
            "irr.max_iterations must be positive".to_string(),
        ));
    }
    if irr.npv_tolerance <= 0.0 || irr.derivative_epsilon <= 0.0 || irr.step_tolerance <= 0.0 {
        return Err(ConfigError::ValidationError(
            "irr tolerances must be positive".to_string(),
        ));
    }

    let format = config.observability.logging.format.to_ascii_lowercase();
    if !LOG_FORMATS.contains(&format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    let weight_total = config.risk_model.weights.total();
    if (weight_total - 1.0).abs() > 1e-6 {
        // Accepted as-is, weights are never renormalised
        tracing::warn!(
            total = weight_total,
            "risk_model.weights do not sum to 1.0; weighted risk will scale with their total"
        );
    }

    Ok(())
}
