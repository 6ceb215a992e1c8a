//! Single-period financial model.
//!
//! Turns [`PropertyInputs`](deal_core::types::PropertyInputs) and
//! [`FinancingTerms`](deal_core::types::FinancingTerms) into
//! [`DealEconomics`]: gross potential rent down to cash flow, plus the three
//! return ratios.
//!
//! ## Formulas
//!
//! - EGI = GPR − vacancy loss
//! - NOI = EGI − operating expenses
//! - Cash flow = NOI − debt service
//! - Cap rate = NOI / purchase price
//! - Cash-on-cash = cash flow / total cash invested
//! - DSCR = NOI / debt service
//!
//! No intermediate figure is rounded; presentation owns rounding.

mod capex;
mod debt;
mod economics;

pub use capex::{age_multiplier, capex_reserve, BASE_CAPEX_RESERVE_PER_UNIT};
pub use debt::monthly_payment;
pub use economics::{implied_value, DealEconomics, ExpenseBreakdown, FinancialModel};
