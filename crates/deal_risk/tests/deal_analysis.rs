//! Integration tests for full deal analysis.

use approx::assert_relative_eq;
use deal_core::types::{FinancingTerms, PropertyInputs, Ratio, Thresholds};
use deal_models::{FinancialModel, InvestmentRecommendation};
use deal_risk::{DealAnalyzer, SensitivityPreset};
use proptest::prelude::*;

fn analyzer() -> DealAnalyzer {
    DealAnalyzer::new(FinancialModel::new(2026))
}

fn worked_property() -> PropertyInputs {
    PropertyInputs {
        purchase_price: 450_000.0,
        asking_price: 450_000.0,
        year_built: 1985,
        unit_count: 1,
        monthly_rent_per_unit: 2_400.0,
        vacancy_rate: 0.05,
        management_fee_percent: 0.08,
        repairs_per_unit_per_year: 1_200.0,
        annual_taxes: 8_500.0,
        annual_insurance: 2_400.0,
        ..Default::default()
    }
}

#[test]
fn test_worked_scenario_report() {
    let metrics = analyzer().analyse(
        &worked_property(),
        &FinancingTerms::from_ltv(0.75, 0.07, 30),
        &Thresholds::default(),
    );
    let econ = &metrics.deal_economics;

    assert_relative_eq!(econ.gross_potential_rent, 28_800.0);
    assert_relative_eq!(econ.effective_gross_income, 27_360.0);
    assert_relative_eq!(econ.monthly_debt_service, 2_245.40, epsilon = 0.01);
    assert_relative_eq!(econ.in_place_cap_rate.value(), 0.028047, epsilon = 1e-6);

    let rent_up = metrics
        .risk_buffers
        .sensitivity(SensitivityPreset::RentUp10Pct)
        .unwrap();
    let rent_down = metrics
        .risk_buffers
        .sensitivity(SensitivityPreset::RentDown10Pct)
        .unwrap();
    assert!(rent_up.cash_flow >= econ.annual_cash_flow);
    assert!(rent_down.cash_flow <= econ.annual_cash_flow);

    // Exit cap falls back to the in-place 2.80%
    let exit_up = metrics
        .risk_buffers
        .sensitivity(SensitivityPreset::ExitCapUp50bp)
        .unwrap();
    assert_relative_eq!(
        exit_up.implied_value.unwrap(),
        12_621.20 / (12_621.20 / 450_000.0 + 0.005),
        epsilon = 1e-6
    );

    assert_eq!(metrics.recommendation, InvestmentRecommendation::Pass);
}

#[test]
fn test_debt_free_deal_scores_dscr_as_exceeds() {
    let property = PropertyInputs {
        purchase_price: 150_000.0,
        unit_count: 2,
        monthly_rent_per_unit: 1_100.0,
        annual_taxes: 1_800.0,
        annual_insurance: 900.0,
        ..Default::default()
    };
    let metrics = analyzer().analyse(
        &property,
        &FinancingTerms::from_ltv(0.0, 0.07, 30),
        &Thresholds::default(),
    );

    assert!(matches!(metrics.deal_economics.dscr, Ratio::Undefined(_)));
    assert_eq!(
        metrics.risk_buffers.stress_test_results.max_rate_before_negative,
        0.5
    );
    assert!(metrics.recommendation >= InvestmentRecommendation::Buy);
}

#[test]
fn test_report_serialises_to_json() {
    let metrics = analyzer().analyse(
        &worked_property(),
        &FinancingTerms::from_ltv(0.75, 0.07, 30),
        &Thresholds::default(),
    );
    let json = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json["recommendation"], "pass");
    assert_eq!(json["scored_metrics"].as_array().unwrap().len(), 4);
    assert_eq!(
        json["risk_buffers"]["sensitivity_analysis"][0]["preset"],
        "rent_up10_pct"
    );
    assert_eq!(json["deal_economics"]["in_place_cap_rate"]["kind"], "value");

    let back: deal_risk::DealMetrics = serde_json::from_value(json).unwrap();
    assert_eq!(back.recommendation, metrics.recommendation);
    assert_eq!(back.deal_economics.dscr.is_defined(), metrics.deal_economics.dscr.is_defined());
}

proptest! {
    #[test]
    fn rent_scenarios_bracket_base_cash_flow(
        rent in 500.0f64..5_000.0,
        units in 1u32..20,
        vacancy in 0.0f64..0.3,
        rate in 0.0f64..0.12,
        ltv in 0.0f64..0.9,
    ) {
        let property = PropertyInputs {
            purchase_price: 100_000.0 * f64::from(units),
            unit_count: units,
            monthly_rent_per_unit: rent,
            vacancy_rate: vacancy,
            annual_taxes: 1_000.0 * f64::from(units),
            ..Default::default()
        };
        let financing = FinancingTerms::from_ltv(ltv, rate, 30);
        let metrics = analyzer().analyse(&property, &financing, &Thresholds::default());
        let base = metrics.deal_economics.annual_cash_flow;
        let buffers = &metrics.risk_buffers;

        prop_assert!(buffers.sensitivity(SensitivityPreset::RentUp10Pct).unwrap().cash_flow >= base);
        prop_assert!(buffers.sensitivity(SensitivityPreset::RentDown10Pct).unwrap().cash_flow <= base);
        prop_assert!(buffers.sensitivity(SensitivityPreset::RateUp100bp).unwrap().cash_flow <= base);
        prop_assert!(buffers.stress_test_results.worst_case_cash_flow <= base);
        prop_assert!((0.0..=100.0).contains(&metrics.overall_score));

        let stress = &buffers.stress_test_results;
        prop_assert!((0.0..=1.0).contains(&stress.max_vacancy_before_negative));
        prop_assert!((0.0..=0.5).contains(&stress.max_rate_before_negative));
    }
}
