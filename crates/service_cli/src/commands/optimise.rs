//! Optimise command implementation
//!
//! Finds the highest grid price around the asking price that meets every target.

use deal_optimiser::{PriceOptimiser, PriceSearchOutcome};
use std::path::Path;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::deal::DealFile;
use crate::Result;

/// Search for the maximum feasible price of the deal at `deal_path` using
/// the configured strategy.
pub fn execute(deal_path: &Path, config: &CliConfig) -> Result<PriceSearchOutcome> {
    let deal = DealFile::load(deal_path)?;
    let thresholds = deal.thresholds_or(&config.thresholds);
    let strategy = config.strategy;

    info!(
        deal = %deal_path.display(),
        asking_price = deal.property.asking_price,
        %strategy,
        "searching for maximum feasible price"
    );

    let outcome = PriceOptimiser::new(config.financial_model())
        .with_strategy(strategy)
        .find_max_feasible_price(&deal.property, &deal.financing, &thresholds);

    match &outcome {
        PriceSearchOutcome::Feasible { price, evaluations } => {
            info!(price, evaluations, "feasible price found")
        }
        PriceSearchOutcome::Infeasible { reason } => warn!(reason = reason.as_str(), "no feasible price"),
    }
    Ok(outcome)
}

/// Run the price search and print the outcome as JSON.
pub fn run(deal_path: &Path, config: &CliConfig, pretty: bool) -> Result<()> {
    let outcome = execute(deal_path, config)?;
    super::emit(&outcome, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::fixtures::{deal_file, WORKED_TOML};
    use deal_core::types::Thresholds;
    use deal_optimiser::SearchStrategy;

    const ALL_CASH_TOML: &str = r#"
[property]
asking_price = 300000.0
year_built = 2020
unit_count = 1
monthly_rent_per_unit = 1381.25
vacancy_rate = 0.0
management_fee_percent = 0.0

[financing]
ltv = 0.0
"#;

    fn config() -> CliConfig {
        CliConfig {
            valuation_year: Some(2026),
            thresholds: Thresholds::new(0.06, 0.0, 1.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_optimise_all_cash() {
        let file = deal_file(ALL_CASH_TOML, ".toml");
        for strategy in [SearchStrategy::Linear, SearchStrategy::Bisection] {
            let config = CliConfig { strategy, ..config() };
            let outcome = execute(file.path(), &config).unwrap();
            assert_eq!(outcome.price(), Some(270_000.0));
        }
    }

    #[test]
    fn test_strategies_differ_in_evaluations() {
        let file = deal_file(ALL_CASH_TOML, ".toml");
        let linear = execute(file.path(), &config()).unwrap();
        let bisection = execute(
            file.path(),
            &CliConfig {
                strategy: SearchStrategy::Bisection,
                ..config()
            },
        )
        .unwrap();

        assert_eq!(linear.price(), bisection.price());
        let evaluations = |o: &PriceSearchOutcome| match o {
            PriceSearchOutcome::Feasible { evaluations, .. } => *evaluations,
            PriceSearchOutcome::Infeasible { .. } => 0,
        };
        assert_ne!(evaluations(&linear), evaluations(&bisection));
    }

    #[test]
    fn test_worked_deal_is_infeasible() {
        let file = deal_file(WORKED_TOML, ".toml");
        let config = CliConfig {
            valuation_year: Some(2026),
            ..Default::default()
        };
        let outcome = execute(file.path(), &config).unwrap();
        assert!(!outcome.is_feasible());
    }
}
