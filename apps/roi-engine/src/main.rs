//! ROI Engine Binary
//!
//! Computes an ROI report for one calculator scenario.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin roi-engine -- --scenario scenario.yaml
//! cargo run --bin roi-engine -- --scenario scenario.yaml --format json --save ./states
//! cargo run --bin roi-engine -- --save ./states          # recompute the saved scenario
//! ```
//!
//! # Environment Variables
//!
//! - `ROI_ENGINE_CONFIG`: Config file path (default: `roi-engine.yaml` if present)
//! - `RUST_LOG`: Log filter (default: `observability.logging.level`)

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use roi_engine::application::dto::{CalculatorState, RoiReport};
use roi_engine::application::use_cases::{CalculateRoiUseCase, ManageScenarioUseCase};
use roi_engine::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use roi_engine::domain::financial::FinancialEngine;
use roi_engine::infrastructure::persistence::JsonFileScenarioStore;
use roi_engine::infrastructure::scenario_file::read_scenario;
use roi_engine::telemetry::init_tracing;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "roi-engine")]
#[command(about = "ROI, NPV and IRR report for an AI investment scenario", long_about = None)]
#[command(version)]
struct Cli {
    /// Calculator state file (YAML or JSON)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Config file (YAML)
    #[arg(short, long, env = "ROI_ENGINE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Directory to persist the calculator state in
    #[arg(long)]
    save: Option<PathBuf>,

    /// Storage key used with --save
    #[arg(long, default_value = roi_engine::application::ports::DEFAULT_STATE_KEY)]
    key: String,

    /// Discard the saved state before running
    #[arg(long, requires = "save")]
    reset: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv();
    let config = resolve_config(cli.config.as_deref())?;
    if let Err(e) = init_tracing(&config.observability.logging) {
        eprintln!("tracing already initialised: {e}");
    }

    tracing::debug!(?config, "configuration loaded");

    let manager = cli.save.as_ref().map(|dir| {
        ManageScenarioUseCase::with_key(Arc::new(JsonFileScenarioStore::new(dir)), cli.key.clone())
    });

    if let Some(manager) = manager.as_ref().filter(|_| cli.reset) {
        manager.reset().context("failed to reset saved scenario")?;
        tracing::info!(key = manager.key(), "saved scenario discarded");
    }

    let state = match (&cli.scenario, &manager) {
        (Some(path), _) => read_scenario(path, config.risk_model.base_discount_rate)
            .with_context(|| format!("failed to load scenario '{}'", path.display()))?,
        (None, Some(manager)) => match manager.load().context("failed to load saved scenario")? {
            Some(state) => state,
            None => fresh_state(&config),
        },
        (None, None) => anyhow::bail!("either --scenario or --save must be given"),
    };

    let use_case = CalculateRoiUseCase::new(
        FinancialEngine::new(config.irr_solver()),
        config.risk_model.weights,
    );
    let report = use_case.execute(&state);

    if let Some(manager) = &manager {
        manager.save(&state).context("failed to save scenario")?;
    }

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", render_text(&report)),
    }

    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Explicit path, else `roi-engine.yaml` in the working directory, else defaults.
fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let path = path.to_string_lossy();
            load_config(Some(&*path)).with_context(|| format!("failed to load config '{path}'"))
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(None).context("failed to load default config")
        }
        None => Ok(Config::default()),
    }
}

fn fresh_state(config: &Config) -> CalculatorState {
    CalculatorState {
        discount_rate: config.risk_model.base_discount_rate,
        ..CalculatorState::default()
    }
}

fn render_text(report: &RoiReport) -> String {
    let m = &report.metrics;
    let t = &report.totals;
    let irr = m.irr.map_or_else(|| "N/A".to_string(), |irr| format!("{irr:.2}%"));

    let mut out = String::new();
    let _ = writeln!(out, "ROI report: {}", display_name(&report.name));
    let _ = writeln!(out);
    let _ = writeln!(out, "Totals");
    let _ = writeln!(out, "  Initial investment     {:>14.2}", t.initial_investment);
    let _ = writeln!(out, "  Annual costs           {:>14.2}", t.annual_costs);
    let _ = writeln!(out, "  Total cost of ownership{:>14.2}", t.total_cost_of_ownership);
    let _ = writeln!(out, "  Annual benefits        {:>14.2}", t.annual_benefits);
    let _ = writeln!(out, "  Total benefits         {:>14.2}", t.total_benefits);
    let _ = writeln!(out);
    let _ = writeln!(out, "Metrics");
    let _ = writeln!(out, "  Simple ROI             {:>13.2}%", m.simple_roi);
    let _ = writeln!(out, "  Annualized ROI         {:>13.2}%", m.annualized_roi);
    let _ = writeln!(out, "  NPV                    {:>14.2}", m.npv);
    let _ = writeln!(out, "  IRR                    {irr:>14}");
    let _ = writeln!(out, "  Payback (months)       {:>14}", m.payback_period_months.to_string());
    let _ = writeln!(
        out,
        "  Discounted payback     {:>14}",
        m.discounted_payback_months.to_string()
    );
    let _ = writeln!(out, "  Benefit/cost ratio     {:>14.3}", m.benefit_cost_ratio);
    let _ = writeln!(out, "  Profitability index    {:>14.3}", m.profitability_index);
    let _ = writeln!(out);
    let _ = writeln!(out, "Risk ({})", report.risk.risk_level);
    let _ = writeln!(out, "  Weighted risk          {:>14.1}", report.risk.weighted_average_risk);
    let _ = writeln!(out, "  Multiplier             {:>14.3}", report.risk.risk_multiplier);
    let _ = writeln!(
        out,
        "  Adjusted discount rate {:>13.2}%",
        report.risk.risk_adjusted_discount_rate
    );
    let _ = writeln!(out, "  Risk-adjusted ROI      {:>13.2}%", m.risk_adjusted_roi);
    let _ = writeln!(out, "  Risk-adjusted NPV      {:>14.2}", m.risk_adjusted_npv);
    let _ = writeln!(out);
    let _ = writeln!(out, "Scenarios");
    for outcome in &report.scenarios {
        let _ = writeln!(
            out,
            "  {:<12} x{:.3}  ROI {:>9.2}%  NPV {:>14.2}",
            outcome.scenario.to_string(),
            outcome.multiplier,
            outcome.roi,
            outcome.npv
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Projection");
    for period in &report.projection {
        let _ = writeln!(
            out,
            "  Year {:<3} net {:>14.2}  cumulative {:>14.2}",
            period.period, period.net_cash_flow, period.cumulative_cash_flow
        );
    }
    out
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}
