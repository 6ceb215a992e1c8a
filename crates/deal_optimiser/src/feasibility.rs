//! Threshold predicate at a candidate purchase price.

use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
use deal_models::{DealEconomics, FinancialModel};

/// Whether `economics` clears every investor target.
///
/// Requires cap rate, cash-on-cash and DSCR at or above target and a strictly
/// positive monthly cash flow. Undefined ratios fail their target, except a
/// DSCR with no debt service which always passes.
pub fn meets_thresholds(economics: &DealEconomics, thresholds: &Thresholds) -> bool {
    economics.in_place_cap_rate.at_least(thresholds.target_cap_rate)
        && economics
            .cash_on_cash_return
            .at_least(thresholds.target_cash_on_cash)
        && economics.dscr.at_least(thresholds.target_dscr)
        && economics.monthly_cash_flow > 0.0
}

/// Re-runs the financial model with the purchase price replaced.
///
/// Everything except the price is held fixed. The loan is re-sized from the
/// LTV at each candidate, so an explicit loan amount or cash-required override
/// on the original financing is ignored here.
///
/// # Examples
/// ```
/// use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
/// use deal_models::FinancialModel;
/// use deal_optimiser::FeasibilityCheck;
///
/// let property = PropertyInputs {
///     asking_price: 200_000.0,
///     unit_count: 2,
///     monthly_rent_per_unit: 1_500.0,
///     ..Default::default()
/// };
/// let financing = FinancingTerms::from_ltv(0.75, 0.065, 30);
/// let thresholds = Thresholds::default();
/// let check = FeasibilityCheck::new(FinancialModel::new(2026), &property, &financing, &thresholds);
///
/// let economics = check.economics_at(160_000.0);
/// assert_eq!(economics.purchase_price, 160_000.0);
/// assert_eq!(economics.loan_amount, 120_000.0);
/// assert!(check.is_feasible(160_000.0));
/// ```
#[derive(Debug, Clone)]
pub struct FeasibilityCheck<'a> {
    model: FinancialModel,
    property: &'a PropertyInputs,
    financing: FinancingTerms,
    thresholds: &'a Thresholds,
}

impl<'a> FeasibilityCheck<'a> {
    /// Create a predicate for one deal.
    pub fn new(
        model: FinancialModel,
        property: &'a PropertyInputs,
        financing: &FinancingTerms,
        thresholds: &'a Thresholds,
    ) -> Self {
        let financing = FinancingTerms {
            loan_amount: 0.0,
            total_cash_required: None,
            ..financing.clone()
        };
        Self {
            model,
            property,
            financing,
            thresholds,
        }
    }

    /// Deal economics at `price`.
    pub fn economics_at(&self, price: f64) -> DealEconomics {
        let candidate = self.property.with_purchase_price(price);
        self.model.compute_deal_economics(&candidate, &self.financing)
    }

    /// Whether every target clears at `price`.
    pub fn is_feasible(&self, price: f64) -> bool {
        meets_thresholds(&self.economics_at(price), self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deal_core::types::{Ratio, UndefinedReason};

    fn all_cash_property() -> PropertyInputs {
        // NOI 16,350 as of 2026
        PropertyInputs {
            purchase_price: 300_000.0,
            asking_price: 300_000.0,
            year_built: 2020,
            monthly_rent_per_unit: 1_381.25,
            vacancy_rate: 0.0,
            management_fee_percent: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_cap_rate_boundary() {
        let property = all_cash_property();
        let financing = FinancingTerms::from_ltv(0.0, 0.07, 30);
        let thresholds = Thresholds::new(0.06, 0.0, 1.0);
        let check = FeasibilityCheck::new(FinancialModel::new(2026), &property, &financing, &thresholds);

        assert_eq!(check.economics_at(270_000.0).net_operating_income, 16_350.0);
        assert!(check.is_feasible(270_000.0));
        assert!(!check.is_feasible(275_000.0));
    }

    #[test]
    fn test_no_debt_service_passes_dscr() {
        let property = all_cash_property();
        let financing = FinancingTerms::from_ltv(0.0, 0.07, 30);
        let thresholds = Thresholds::new(0.0, 0.0, 99.0);
        let check = FeasibilityCheck::new(FinancialModel::new(2026), &property, &financing, &thresholds);

        let economics = check.economics_at(250_000.0);
        assert_eq!(
            economics.dscr,
            Ratio::Undefined(UndefinedReason::NoDebtService)
        );
        assert!(meets_thresholds(&economics, &thresholds));
    }

    #[test]
    fn test_zero_price_fails_cap_rate() {
        let property = all_cash_property();
        let financing = FinancingTerms::from_ltv(0.0, 0.07, 30);
        let thresholds = Thresholds::new(0.0, 0.0, 0.0);
        let check = FeasibilityCheck::new(FinancialModel::new(2026), &property, &financing, &thresholds);

        let economics = check.economics_at(0.0);
        assert!(!economics.in_place_cap_rate.is_defined());
        assert!(!meets_thresholds(&economics, &thresholds));
    }

    #[test]
    fn test_requires_strictly_positive_cash_flow() {
        let property = PropertyInputs {
            monthly_rent_per_unit: 18.75,
            ..all_cash_property()
        };
        // GPR 225 exactly offsets the capex reserve
        let financing = FinancingTerms::from_ltv(0.0, 0.07, 30);
        let thresholds = Thresholds::new(0.0, 0.0, 0.0);
        let check = FeasibilityCheck::new(FinancialModel::new(2026), &property, &financing, &thresholds);

        let economics = check.economics_at(100_000.0);
        assert_eq!(economics.monthly_cash_flow, 0.0);
        assert!(!meets_thresholds(&economics, &thresholds));
    }

    #[test]
    fn test_loan_resized_from_ltv() {
        let property = all_cash_property();
        let financing = FinancingTerms {
            loan_amount: 500_000.0,
            total_cash_required: Some(1.0),
            ..FinancingTerms::from_ltv(0.8, 0.06, 30)
        };
        let thresholds = Thresholds::default();
        let check = FeasibilityCheck::new(FinancialModel::new(2026), &property, &financing, &thresholds);

        let economics = check.economics_at(250_000.0);
        assert_eq!(economics.loan_amount, 200_000.0);
        assert_eq!(economics.total_cash_required, 50_000.0);
    }

    #[test]
    fn test_each_target_can_bind() {
        let property = PropertyInputs {
            unit_count: 4,
            monthly_rent_per_unit: 1_200.0,
            ..all_cash_property()
        };
        let financing = FinancingTerms::from_ltv(0.75, 0.065, 30);
        let model = FinancialModel::new(2026);
        let economics = FeasibilityCheck::new(model, &property, &financing, &Thresholds::default())
            .economics_at(300_000.0);
        let cap = economics.in_place_cap_rate.value();
        let coc = economics.cash_on_cash_return.value();
        let dscr = economics.dscr.value();

        let loose = Thresholds::new(cap, coc, dscr);
        assert!(meets_thresholds(&economics, &loose));
        assert!(!meets_thresholds(&economics, &Thresholds::new(cap + 1e-6, coc, dscr)));
        assert!(!meets_thresholds(&economics, &Thresholds::new(cap, coc + 1e-6, dscr)));
        assert!(!meets_thresholds(&economics, &Thresholds::new(cap, coc, dscr + 1e-6)));
    }
}
