//! # deal_optimiser
//!
//! Maximum feasible purchase price search.
//!
//! Given a property, its financing and the investor's thresholds, find the
//! highest price on a fixed $5,000 grid at which every target still clears.
//!
//! ## Architecture Position
//!
//! Layer 2.5 of the underwriting workspace. Depends on `deal_core` (L1) and
//! `deal_models` (L2); it re-runs the financial model at candidate prices.
//!
//! ## Modules
//!
//! - `grid`: The search domain around the asking price
//! - `search`: Grid searches over an explicit feasibility predicate
//! - `feasibility`: The threshold predicate at a candidate price
//! - `optimiser`: [`PriceOptimiser`] tying the three together
//!
//! ## Example
//!
//! ```rust
//! use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
//! use deal_models::FinancialModel;
//! use deal_optimiser::{PriceOptimiser, PriceSearchOutcome};
//!
//! let property = PropertyInputs {
//!     purchase_price: 300_000.0,
//!     asking_price: 300_000.0,
//!     year_built: 2020,
//!     monthly_rent_per_unit: 1_381.25,
//!     vacancy_rate: 0.0,
//!     management_fee_percent: 0.0,
//!     ..Default::default()
//! };
//! let all_cash = FinancingTerms::from_ltv(0.0, 0.07, 30);
//! let thresholds = Thresholds::new(0.06, 0.0, 1.0);
//!
//! let outcome = PriceOptimiser::new(FinancialModel::new(2026))
//!     .find_max_feasible_price(&property, &all_cash, &thresholds);
//! assert_eq!(outcome.price(), Some(270_000.0));
//! ```

#![deny(missing_docs)]

pub mod feasibility;
pub mod grid;
pub mod optimiser;
pub mod search;

pub use feasibility::{meets_thresholds, FeasibilityCheck};
pub use grid::PriceGrid;
pub use optimiser::{find_max_feasible_price, PriceOptimiser};
pub use search::{
    GridBisection, LinearGridScan, PriceSearch, PriceSearchOutcome, SearchStrategy,
    NO_FEASIBLE_PRICE,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::feasibility::*;
    pub use crate::grid::*;
    pub use crate::optimiser::*;
    pub use crate::search::*;
}
