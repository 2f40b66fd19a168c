use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use retirement_engine::config::AppConfig;
use retirement_engine::error::AppError;
use retirement_engine::simulation::{DayCountPolicy, RetirementEngine};
use retirement_engine::telemetry;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads configuration and applies a CLI day-count override when present.
pub(crate) fn load_config(policy: Option<DayCountPolicy>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(policy) = policy {
        config.simulation.day_count_policy = policy;
    }
    Ok(config)
}

/// Config for the one-shot commands, with logs routed to stderr.
pub(crate) fn load_cli_config(policy: Option<DayCountPolicy>) -> Result<AppConfig, AppError> {
    let config = load_config(policy)?;
    telemetry::init_stderr(&config.telemetry)?;
    Ok(config)
}

pub(crate) fn build_engine(config: &AppConfig) -> RetirementEngine {
    RetirementEngine::new(config.simulation)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_policy(raw: &str) -> Result<DayCountPolicy, String> {
    raw.parse()
}
