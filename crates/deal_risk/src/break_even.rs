//! Break-even occupancy.

use deal_core::types::{Ratio, UndefinedReason};
use deal_models::DealEconomics;

/// Occupancy at which rent covers fixed costs and debt service.
///
/// ```text
/// break_even = (taxes + insurance + annual_debt_service)
///            / (GPR × (1 − management / EGI))
/// ```
///
/// Management is the only cost treated as variable. The result is not
/// clamped, so a value above 1 means even full occupancy falls short.
/// Returns `Undefined(ZeroIncome)` when GPR or EGI is not positive, or when
/// management consumes all of EGI.
///
/// # Examples
/// ```
/// use deal_core::types::{FinancingTerms, PropertyInputs};
/// use deal_models::FinancialModel;
/// use deal_risk::break_even_occupancy;
///
/// let property = PropertyInputs {
///     purchase_price: 200_000.0,
///     monthly_rent_per_unit: 2_000.0,
///     annual_taxes: 2_400.0,
///     annual_insurance: 1_200.0,
///     management_fee_percent: 0.10,
///     ..Default::default()
/// };
/// let all_cash = FinancingTerms::from_ltv(0.0, 0.07, 30);
/// let economics = FinancialModel::new(2026).compute_deal_economics(&property, &all_cash);
///
/// // 3,600 / (24,000 × 0.9)
/// let occupancy = break_even_occupancy(&economics).value();
/// assert!((occupancy - 1.0 / 6.0).abs() < 1e-12);
/// ```
pub fn break_even_occupancy(economics: &DealEconomics) -> Ratio {
    let gpr = economics.gross_potential_rent;
    let egi = economics.effective_gross_income;
    if gpr <= 0.0 || egi <= 0.0 {
        return Ratio::Undefined(UndefinedReason::ZeroIncome);
    }

    let costs = &economics.expense_breakdown;
    let fixed_costs = costs.taxes + costs.insurance + economics.annual_debt_service;
    let variable_fraction = costs.management / egi;
    Ratio::checked(
        fixed_costs,
        gpr * (1.0 - variable_fraction),
        UndefinedReason::ZeroIncome,
    )
}
