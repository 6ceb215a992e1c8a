//! # deal_models
//!
//! Single-period deal economics and threshold scoring.
//!
//! ## Architecture Position
//!
//! Layer 2 of the underwriting workspace. Depends only on `deal_core` (L1).
//! Both the risk layer and the price optimiser re-run these models with
//! perturbed inputs, so everything here is pure and allocation-light.
//!
//! ## Modules
//!
//! - `financial`: Income statement, debt service, returns ([`FinancialModel`])
//! - `scoring`: Metric tiers, overall score and recommendation ([`ScoringEngine`])
//!
//! ## Example
//!
//! ```rust
//! use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
//! use deal_models::{FinancialModel, InvestmentRecommendation, ScoringEngine};
//!
//! let property = PropertyInputs {
//!     purchase_price: 450_000.0,
//!     year_built: 1985,
//!     unit_count: 1,
//!     monthly_rent_per_unit: 2_400.0,
//!     vacancy_rate: 0.05,
//!     management_fee_percent: 0.08,
//!     repairs_per_unit_per_year: 1_200.0,
//!     annual_taxes: 8_500.0,
//!     annual_insurance: 2_400.0,
//!     ..Default::default()
//! };
//! let financing = FinancingTerms::from_ltv(0.75, 0.07, 30);
//!
//! let economics = FinancialModel::new(2026).compute_deal_economics(&property, &financing);
//! assert!((economics.net_operating_income - 12_621.20).abs() < 1e-6);
//! assert!(economics.annual_cash_flow < 0.0);
//!
//! let card = ScoringEngine::default().score_deal(&economics, &Thresholds::default());
//! assert_eq!(card.recommendation, InvestmentRecommendation::Pass);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod financial;
pub mod scoring;

pub use financial::{DealEconomics, ExpenseBreakdown, FinancialModel};
pub use scoring::{
    CoreMetric, InvestmentRecommendation, MetricDirection, MetricScore, ScoreCard, ScoredMetric,
    ScoringEngine, ScoringWeights,
};
