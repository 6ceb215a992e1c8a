//! Deal assumptions supplied by the surrounding collaborator.
//!
//! - [`PropertyInputs`]: acquisition, income and operating expense assumptions
//! - [`FinancingTerms`]: loan sizing and rate
//! - [`Thresholds`]: investor return targets
//!
//! All rates are decimals (`0.07` is 7%), except `target_dscr` which is a
//! coverage multiplier.

use super::error::InputError;

/// Acquisition, income and operating expense assumptions for one property.
///
/// # Examples
/// ```
/// use deal_core::types::PropertyInputs;
///
/// let property = PropertyInputs {
///     purchase_price: 450_000.0,
///     unit_count: 1,
///     monthly_rent_per_unit: 2_400.0,
///     ..Default::default()
/// };
/// assert_eq!(property.total_monthly_rent(), 2_400.0);
/// assert_eq!(property.effective_price(), 450_000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PropertyInputs {
    /// Contract price; non-positive means "not yet offered".
    pub purchase_price: f64,
    /// List price, used when no purchase price is set and as the optimiser's anchor.
    pub asking_price: f64,
    /// Construction year, drives the capex age multiplier.
    pub year_built: i32,
    /// Number of rentable units.
    pub unit_count: u32,
    /// Market rent per unit per month.
    pub monthly_rent_per_unit: f64,
    /// Vacancy and credit loss as a fraction of gross potential rent.
    pub vacancy_rate: f64,
    /// Property management fee as a fraction of effective gross income.
    pub management_fee_percent: f64,
    /// Repairs and maintenance budget per unit per year.
    pub repairs_per_unit_per_year: f64,
    /// Annual property taxes.
    pub annual_taxes: f64,
    /// Annual insurance premium.
    pub annual_insurance: f64,
    /// Any other annual operating expense.
    pub other_annual_expenses: f64,
    /// Closing costs paid in cash at acquisition.
    pub closing_costs: f64,
    /// Total monthly rent entered directly for a single-unit property.
    pub total_monthly_rent: Option<f64>,
    /// Owner-paid utilities per year.
    pub annual_utilities: f64,
    /// Cap rate used to value the property on exit.
    pub exit_cap_rate: Option<f64>,
}

impl Default for PropertyInputs {
    fn default() -> Self {
        Self {
            purchase_price: 0.0,
            asking_price: 0.0,
            year_built: 2000,
            unit_count: 1,
            monthly_rent_per_unit: 0.0,
            vacancy_rate: 0.05,
            management_fee_percent: 0.08,
            repairs_per_unit_per_year: 0.0,
            annual_taxes: 0.0,
            annual_insurance: 0.0,
            other_annual_expenses: 0.0,
            closing_costs: 0.0,
            total_monthly_rent: None,
            annual_utilities: 0.0,
            exit_cap_rate: None,
        }
    }
}

impl PropertyInputs {
    /// Purchase price, falling back to asking price when no purchase price is set.
    pub fn effective_price(&self) -> f64 {
        if self.purchase_price > 0.0 {
            self.purchase_price
        } else {
            self.asking_price
        }
    }

    /// Scheduled rent for the whole property per month.
    ///
    /// A directly entered total wins only for single-unit properties.
    pub fn total_monthly_rent(&self) -> f64 {
        match self.total_monthly_rent {
            Some(total) if self.unit_count == 1 => total,
            _ => self.monthly_rent_per_unit * f64::from(self.unit_count),
        }
    }

    /// Copy of these inputs with every rent figure scaled by `factor`.
    pub fn with_rent_scaled(&self, factor: f64) -> Self {
        Self {
            monthly_rent_per_unit: self.monthly_rent_per_unit * factor,
            total_monthly_rent: self.total_monthly_rent.map(|t| t * factor),
            ..self.clone()
        }
    }

    /// Copy of these inputs at a different purchase price.
    pub fn with_purchase_price(&self, purchase_price: f64) -> Self {
        Self {
            purchase_price,
            ..self.clone()
        }
    }

    /// Copy of these inputs with a different vacancy rate.
    pub fn with_vacancy_rate(&self, vacancy_rate: f64) -> Self {
        Self {
            vacancy_rate,
            ..self.clone()
        }
    }

    /// Reject structurally invalid assumptions.
    ///
    /// Intended for the input boundary; the model itself does not call this.
    pub fn validate(&self) -> Result<(), InputError> {
        let amounts = [
            ("purchase_price", self.purchase_price),
            ("asking_price", self.asking_price),
            ("monthly_rent_per_unit", self.monthly_rent_per_unit),
            ("repairs_per_unit_per_year", self.repairs_per_unit_per_year),
            ("annual_taxes", self.annual_taxes),
            ("annual_insurance", self.annual_insurance),
            ("other_annual_expenses", self.other_annual_expenses),
            ("closing_costs", self.closing_costs),
            ("annual_utilities", self.annual_utilities),
            (
                "total_monthly_rent",
                self.total_monthly_rent.unwrap_or_default(),
            ),
        ];
        for (field, value) in amounts {
            non_negative(field, value)?;
        }
        unit_fraction("vacancy_rate", self.vacancy_rate)?;
        unit_fraction("management_fee_percent", self.management_fee_percent)?;
        if let Some(exit_cap) = self.exit_cap_rate {
            unit_fraction("exit_cap_rate", exit_cap)?;
        }
        if self.effective_price() <= 0.0 {
            return Err(InputError::MissingPrice);
        }
        Ok(())
    }
}

/// Loan sizing and pricing.
///
/// # Examples
/// ```
/// use deal_core::types::{FinancingTerms, PropertyInputs};
///
/// let property = PropertyInputs { purchase_price: 400_000.0, ..Default::default() };
/// let financing = FinancingTerms::from_ltv(0.75, 0.07, 30);
/// assert_eq!(financing.resolved_loan_amount(&property), 300_000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinancingTerms {
    /// Explicit loan amount; non-positive means "derive from LTV".
    pub loan_amount: f64,
    /// Loan-to-value ratio.
    pub ltv: f64,
    /// Annual note rate.
    pub interest_rate: f64,
    /// Amortisation term in years.
    pub loan_term_years: u32,
    /// Explicit total cash invested; derived from price, loan and closing costs when unset.
    pub total_cash_required: Option<f64>,
}

impl Default for FinancingTerms {
    fn default() -> Self {
        Self {
            loan_amount: 0.0,
            ltv: 0.75,
            interest_rate: 0.07,
            loan_term_years: 30,
            total_cash_required: None,
        }
    }
}

impl FinancingTerms {
    /// Accepted amortisation terms, in years.
    pub const LOAN_TERM_YEARS: std::ops::RangeInclusive<u32> = 1..=50;

    /// Terms whose loan amount is sized from the purchase price.
    pub fn from_ltv(ltv: f64, interest_rate: f64, loan_term_years: u32) -> Self {
        Self {
            ltv,
            interest_rate,
            loan_term_years,
            ..Self::default()
        }
    }

    /// Loan amount, derived as `price × ltv` when not set explicitly.
    pub fn resolved_loan_amount(&self, property: &PropertyInputs) -> f64 {
        if self.loan_amount > 0.0 {
            self.loan_amount
        } else {
            property.effective_price() * self.ltv
        }
    }

    /// Cash invested at close: the explicit override, or down payment plus closing costs.
    pub fn resolved_total_cash_required(&self, property: &PropertyInputs, loan_amount: f64) -> f64 {
        self.total_cash_required
            .unwrap_or_else(|| property.effective_price() - loan_amount + property.closing_costs)
    }

    /// Copy with a different interest rate.
    pub fn with_interest_rate(&self, interest_rate: f64) -> Self {
        Self {
            interest_rate,
            ..self.clone()
        }
    }

    /// Reject structurally invalid terms.
    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("loan_amount", self.loan_amount)?;
        unit_fraction("ltv", self.ltv)?;
        unit_fraction("interest_rate", self.interest_rate)?;
        if !Self::LOAN_TERM_YEARS.contains(&self.loan_term_years) {
            return Err(InputError::LoanTermOutOfRange {
                years: self.loan_term_years,
                min: *Self::LOAN_TERM_YEARS.start(),
                max: *Self::LOAN_TERM_YEARS.end(),
            });
        }
        if let Some(cash) = self.total_cash_required {
            non_negative("total_cash_required", cash)?;
        }
        Ok(())
    }
}

/// Investor return targets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thresholds {
    /// Minimum in-place cap rate.
    pub target_cap_rate: f64,
    /// Minimum cash-on-cash return.
    pub target_cash_on_cash: f64,
    /// Minimum debt service coverage multiple.
    pub target_dscr: f64,
    /// Monthly cash flow the scoring engine grades against.
    pub target_monthly_cash_flow: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            target_cap_rate: 0.06,
            target_cash_on_cash: 0.08,
            target_dscr: 1.25,
            target_monthly_cash_flow: 0.0,
        }
    }
}

impl Thresholds {
    /// Create thresholds for the three ratio targets with no cash flow target.
    pub fn new(target_cap_rate: f64, target_cash_on_cash: f64, target_dscr: f64) -> Self {
        Self {
            target_cap_rate,
            target_cash_on_cash,
            target_dscr,
            target_monthly_cash_flow: 0.0,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

fn unit_fraction(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(InputError::OutOfUnitRange { field, value });
    }
    Ok(())
}
