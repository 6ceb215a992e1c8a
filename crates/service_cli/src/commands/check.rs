//! Check command implementation
//!
//! Reports the resolved configuration and build features.

use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Resolved configuration plus build information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Crate version
    pub version: &'static str,
    /// Year the financial model ages buildings against
    pub effective_valuation_year: i32,
    /// Whether sensitivity presets run on the rayon pool
    pub parallel: bool,
    /// Configuration after all sources were merged
    pub config: CliConfig,
}

/// Build the report for `config`.
pub fn execute(config: &CliConfig) -> CheckReport {
    CheckReport {
        version: env!("CARGO_PKG_VERSION"),
        effective_valuation_year: config.financial_model().as_of_year(),
        parallel: cfg!(feature = "parallel"),
        config: config.clone(),
    }
}

/// Print the resolved configuration as JSON.
pub fn run(config: &CliConfig) -> Result<()> {
    let report = execute(config);
    info!(
        log_level = %report.config.log_level,
        valuation_year = report.effective_valuation_year,
        strategy = %report.config.strategy,
        "configuration resolved"
    );
    super::emit(&report, true)
}
