//! Combined adverse scenario and cash flow boundaries.

use deal_core::math::solvers::BoundarySolver;
use deal_core::types::{FinancingTerms, PropertyInputs};
use deal_models::FinancialModel;

/// Rent multiplier in the worst case.
pub const STRESS_RENT_FACTOR: f64 = 0.90;
/// Vacancy added in the worst case.
pub const STRESS_VACANCY_SHIFT: f64 = 0.05;
/// Ceiling on the worst-case vacancy.
pub const STRESS_VACANCY_CAP: f64 = 0.25;
/// Repairs multiplier in the worst case.
pub const STRESS_REPAIRS_FACTOR: f64 = 1.10;

/// Vacancy search bracket.
pub const VACANCY_DOMAIN: (f64, f64) = (0.0, 1.0);
/// Interest rate search bracket.
pub const RATE_DOMAIN: (f64, f64) = (0.0, 0.5);

/// Stress test output.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressTestResult {
    /// Annual cash flow under the combined adverse scenario
    pub worst_case_cash_flow: f64,
    /// Highest vacancy rate in `[0, 1]` keeping annual cash flow non-negative
    pub max_vacancy_before_negative: f64,
    /// Highest interest rate in `[0, 0.5]` keeping annual cash flow non-negative
    pub max_rate_before_negative: f64,
}

/// Inputs for the combined adverse scenario.
///
/// Rent ×0.90, vacancy `min(vacancy + 0.05, 0.25)`, repairs ×1.10.
///
/// # Examples
/// ```
/// use deal_core::types::PropertyInputs;
/// use deal_risk::scenarios::worst_case_inputs;
///
/// let property = PropertyInputs {
///     monthly_rent_per_unit: 2_000.0,
///     vacancy_rate: 0.05,
///     repairs_per_unit_per_year: 1_000.0,
///     ..Default::default()
/// };
/// let stressed = worst_case_inputs(&property);
/// assert!((stressed.monthly_rent_per_unit - 1_800.0).abs() < 1e-9);
/// assert!((stressed.vacancy_rate - 0.10).abs() < 1e-12);
/// assert!((stressed.repairs_per_unit_per_year - 1_100.0).abs() < 1e-9);
/// ```
pub fn worst_case_inputs(property: &PropertyInputs) -> PropertyInputs {
    let stressed = property
        .with_rent_scaled(STRESS_RENT_FACTOR)
        .with_vacancy_rate((property.vacancy_rate + STRESS_VACANCY_SHIFT).min(STRESS_VACANCY_CAP));
    PropertyInputs {
        repairs_per_unit_per_year: property.repairs_per_unit_per_year * STRESS_REPAIRS_FACTOR,
        ..stressed
    }
}

/// Run the stress test.
///
/// The two boundaries hold every other input at base. A boundary already
/// negative at the bottom of its bracket reports the bottom; one never
/// negative reports the top. If the solver fails, the bottom of the bracket
/// is reported and a warning logged.
pub fn stress_test(
    model: &FinancialModel,
    solver: &BoundarySolver<f64>,
    property: &PropertyInputs,
    financing: &FinancingTerms,
) -> StressTestResult {
    let worst_case_cash_flow = model
        .compute_deal_economics(&worst_case_inputs(property), financing)
        .annual_cash_flow;

    let cash_flow_at_vacancy = |vacancy: f64| {
        model
            .compute_deal_economics(&property.with_vacancy_rate(vacancy), financing)
            .annual_cash_flow
    };
    let max_vacancy_before_negative =
        boundary_or_lower(solver, cash_flow_at_vacancy, VACANCY_DOMAIN, "vacancy");

    let cash_flow_at_rate = |rate: f64| {
        model
            .compute_deal_economics(property, &financing.with_interest_rate(rate))
            .annual_cash_flow
    };
    let max_rate_before_negative =
        boundary_or_lower(solver, cash_flow_at_rate, RATE_DOMAIN, "interest_rate");

    StressTestResult {
        worst_case_cash_flow,
        max_vacancy_before_negative,
        max_rate_before_negative,
    }
}

fn boundary_or_lower<F>(
    solver: &BoundarySolver<f64>,
    cash_flow: F,
    (lo, hi): (f64, f64),
    input: &'static str,
) -> f64
where
    F: Fn(f64) -> f64,
{
    match solver.find_boundary(cash_flow, lo, hi) {
        Ok(boundary) => boundary.value(),
        Err(err) => {
            tracing::warn!(input, error = %err, "cash flow boundary search failed, reporting lower bound");
            lo
        }
    }
}
