//! End-to-end checks of the CLI commands against deal files on disk.

use service_cli::commands::{self, write_json};
use service_cli::config::{build_config_with, CliArgs, CliConfig};
use service_cli::CliError;
use std::io::Write;

const DUPLEX_JSON: &str = r#"{
    "property": {
        "purchase_price": 300000.0,
        "asking_price": 300000.0,
        "year_built": 2012,
        "unit_count": 2,
        "monthly_rent_per_unit": 1800.0,
        "annual_taxes": 3600.0,
        "annual_insurance": 1200.0,
        "repairs_per_unit_per_year": 600.0,
        "exit_cap_rate": 0.06
    },
    "financing": { "ltv": 0.75, "interest_rate": 0.065, "loan_term_years": 30 }
}"#;

fn deal_file(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn config() -> CliConfig {
    let cli = CliArgs {
        valuation_year: Some(2026),
        ..Default::default()
    };
    build_config_with(&cli, |_| None).unwrap()
}

#[test]
fn test_analyse_json_output() {
    let file = deal_file(DUPLEX_JSON, ".json");
    let metrics = commands::analyse::execute(file.path(), &config()).unwrap();

    let mut out = Vec::new();
    write_json(&mut out, &metrics, false).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert!(json["deal_economics"]["net_operating_income"].is_number());
    assert_eq!(json["risk_buffers"]["sensitivity_analysis"].as_array().unwrap().len(), 6);
    assert_eq!(json["scored_metrics"].as_array().unwrap().len(), 4);
    assert!(json["recommendation"].is_string());
    let exit_cap_up = &json["risk_buffers"]["sensitivity_analysis"][4];
    assert_eq!(exit_cap_up["preset"], "exit_cap_up50bp");
    assert!(exit_cap_up["implied_value"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_optimise_json_output() {
    let file = deal_file(DUPLEX_JSON, ".json");
    let outcome = commands::optimise::execute(file.path(), &config()).unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    let status = json["status"].as_str().unwrap();
    assert!(status == "feasible" || status == "infeasible");
    if let Some(price) = outcome.price() {
        assert!((210_000.0..=390_000.0).contains(&price));
        assert_eq!(price % 5_000.0, 0.0);
    }
}

#[test]
fn test_analyse_and_optimise_agree_on_format_errors() {
    let file = deal_file(DUPLEX_JSON, ".yaml");
    assert!(matches!(
        commands::analyse::execute(file.path(), &config()),
        Err(CliError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        commands::optimise::execute(file.path(), &config()),
        Err(CliError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_check_report() {
    let report = commands::check::execute(&config());
    assert_eq!(report.effective_valuation_year, 2026);
    assert_eq!(report.config.thresholds.target_cap_rate, 0.06);
}
