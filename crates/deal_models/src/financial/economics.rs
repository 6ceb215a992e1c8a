//! Deal economics: income statement, debt service and returns.

use chrono::Datelike;
use deal_core::types::{FinancingTerms, PropertyInputs, Ratio, UndefinedReason};

use super::capex::capex_reserve;
use super::debt::monthly_payment;

/// Annual operating expenses by line item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpenseBreakdown {
    /// Property taxes
    pub taxes: f64,
    /// Insurance premium
    pub insurance: f64,
    /// Management fee on EGI
    pub management: f64,
    /// Repairs and maintenance
    pub repairs: f64,
    /// Age-scaled capex reserve
    pub capex_reserve: f64,
    /// Owner-paid utilities
    pub utilities: f64,
    /// Everything else
    pub other: f64,
    /// Total operating expenses / EGI
    pub expense_ratio: Ratio,
}

impl ExpenseBreakdown {
    /// Sum of all line items.
    pub fn total(&self) -> f64 {
        self.taxes
            + self.insurance
            + self.management
            + self.repairs
            + self.capex_reserve
            + self.utilities
            + self.other
    }
}

/// Single-period economics of a deal.
///
/// Invariants, exact by construction:
/// - `effective_gross_income == gross_potential_rent - vacancy_loss`
/// - `net_operating_income == effective_gross_income - total_operating_expenses`
/// - `annual_cash_flow == net_operating_income - annual_debt_service`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealEconomics {
    /// Price the ratios were computed against
    pub purchase_price: f64,
    /// Loan amount after LTV derivation
    pub loan_amount: f64,
    /// Cash invested at close
    pub total_cash_required: f64,
    /// Annual scheduled rent at full occupancy (GPR)
    pub gross_potential_rent: f64,
    /// Rent lost to vacancy and credit loss
    pub vacancy_loss: f64,
    /// GPR less vacancy loss (EGI)
    pub effective_gross_income: f64,
    /// Operating expenses by line item
    pub expense_breakdown: ExpenseBreakdown,
    /// Sum of operating expenses
    pub total_operating_expenses: f64,
    /// Net operating income (NOI)
    pub net_operating_income: f64,
    /// Monthly principal and interest
    pub monthly_debt_service: f64,
    /// Annual principal and interest
    pub annual_debt_service: f64,
    /// NOI less annual debt service
    pub annual_cash_flow: f64,
    /// Annual cash flow / 12
    pub monthly_cash_flow: f64,
    /// NOI / purchase price
    pub in_place_cap_rate: Ratio,
    /// Annual cash flow / total cash required
    pub cash_on_cash_return: Ratio,
    /// NOI / annual debt service
    pub dscr: Ratio,
}

/// The financial model, pinned to an as-of year for property age.
///
/// Keeping the year explicit makes every computation a pure function of its
/// arguments; [`FinancialModel::current`] reads the clock once at the edge.
///
/// # Examples
/// ```
/// use deal_core::types::{FinancingTerms, PropertyInputs};
/// use deal_models::FinancialModel;
///
/// let property = PropertyInputs {
///     purchase_price: 200_000.0,
///     monthly_rent_per_unit: 2_000.0,
///     vacancy_rate: 0.0,
///     management_fee_percent: 0.0,
///     year_built: 2020,
///     ..Default::default()
/// };
/// let all_cash = FinancingTerms::from_ltv(0.0, 0.07, 30);
///
/// let econ = FinancialModel::new(2026).compute_deal_economics(&property, &all_cash);
/// assert_eq!(econ.gross_potential_rent, 24_000.0);
/// assert!(!econ.dscr.is_defined());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialModel {
    as_of_year: i32,
}

impl FinancialModel {
    /// Model evaluated as of `as_of_year`.
    pub fn new(as_of_year: i32) -> Self {
        Self { as_of_year }
    }

    /// Model evaluated as of the current local calendar year.
    pub fn current() -> Self {
        Self::new(chrono::Local::now().year())
    }

    /// Year used to age the building.
    pub fn as_of_year(&self) -> i32 {
        self.as_of_year
    }

    /// Compute deal economics. Total and pure: every division is guarded.
    pub fn compute_deal_economics(
        &self,
        property: &PropertyInputs,
        financing: &FinancingTerms,
    ) -> DealEconomics {
        let units = f64::from(property.unit_count);

        let gross_potential_rent = property.total_monthly_rent() * 12.0;
        let vacancy_loss = gross_potential_rent * property.vacancy_rate;
        let effective_gross_income = gross_potential_rent - vacancy_loss;

        let mut expense_breakdown = ExpenseBreakdown {
            taxes: property.annual_taxes,
            insurance: property.annual_insurance,
            management: effective_gross_income * property.management_fee_percent,
            repairs: property.repairs_per_unit_per_year * units,
            capex_reserve: capex_reserve(property.year_built, property.unit_count, self.as_of_year),
            utilities: property.annual_utilities,
            other: property.other_annual_expenses,
            expense_ratio: Ratio::Undefined(UndefinedReason::ZeroIncome),
        };
        let total_operating_expenses = expense_breakdown.total();
        expense_breakdown.expense_ratio = Ratio::checked(
            total_operating_expenses,
            effective_gross_income,
            UndefinedReason::ZeroIncome,
        );

        let net_operating_income = effective_gross_income - total_operating_expenses;

        let loan_amount = financing.resolved_loan_amount(property);
        let monthly_debt_service = monthly_payment(
            loan_amount,
            financing.interest_rate,
            financing.loan_term_years,
        );
        let annual_debt_service = monthly_debt_service * 12.0;
        let annual_cash_flow = net_operating_income - annual_debt_service;
        let total_cash_required = financing.resolved_total_cash_required(property, loan_amount);

        DealEconomics {
            purchase_price: property.purchase_price,
            loan_amount,
            total_cash_required,
            gross_potential_rent,
            vacancy_loss,
            effective_gross_income,
            expense_breakdown,
            total_operating_expenses,
            net_operating_income,
            monthly_debt_service,
            annual_debt_service,
            annual_cash_flow,
            monthly_cash_flow: annual_cash_flow / 12.0,
            in_place_cap_rate: Ratio::checked(
                net_operating_income,
                property.purchase_price,
                UndefinedReason::ZeroPrice,
            ),
            cash_on_cash_return: Ratio::checked(
                annual_cash_flow,
                total_cash_required,
                UndefinedReason::ZeroCashInvested,
            ),
            dscr: Ratio::checked(
                net_operating_income,
                annual_debt_service,
                UndefinedReason::NoDebtService,
            ),
        }
    }
}

impl Default for FinancialModel {
    fn default() -> Self {
        Self::current()
    }
}

/// Direct-capitalisation value: `noi / cap_rate`, `None` for a non-positive cap rate.
///
/// # Examples
/// ```
/// use deal_models::financial::implied_value;
///
/// assert_eq!(implied_value(30_000.0, 0.06), Some(500_000.0));
/// assert_eq!(implied_value(30_000.0, 0.0), None);
/// ```
pub fn implied_value(noi: f64, cap_rate: f64) -> Option<f64> {
    if cap_rate > 0.0 {
        let value = noi / cap_rate;
        value.is_finite().then_some(value)
    } else {
        None
    }
}
