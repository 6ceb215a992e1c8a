//! Analyse command implementation
//!
//! Runs the financial model, scoring and risk analysis on one deal file.

use deal_risk::{DealAnalyzer, DealMetrics};
use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::deal::DealFile;
use crate::Result;

/// Analyse the deal at `deal_path`.
pub fn execute(deal_path: &Path, config: &CliConfig) -> Result<DealMetrics> {
    let deal = DealFile::load(deal_path)?;
    let thresholds = deal.thresholds_or(&config.thresholds);
    let model = config.financial_model();

    info!(
        deal = %deal_path.display(),
        as_of_year = model.as_of_year(),
        "analysing deal"
    );

    let metrics = DealAnalyzer::new(model).analyse(&deal.property, &deal.financing, &thresholds);

    info!(
        overall_score = metrics.overall_score,
        recommendation = %metrics.recommendation,
        "analysis complete"
    );
    Ok(metrics)
}

/// Analyse a deal and print the metrics as JSON.
pub fn run(deal_path: &Path, config: &CliConfig, pretty: bool) -> Result<()> {
    let metrics = execute(deal_path, config)?;
    super::emit(&metrics, pretty)
}
