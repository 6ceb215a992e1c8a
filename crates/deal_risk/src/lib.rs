//! # deal_risk (L3: Application)
//!
//! Risk analysis and the full deal report.
//!
//! This crate provides:
//! - Break-even occupancy
//! - Six preset sensitivity scenarios (rent, interest rate, exit cap)
//! - A stress test: combined adverse scenario plus vacancy and rate
//!   boundaries found by bisection
//! - [`DealMetrics`]: economics, risk buffers, scores and recommendation in one
//!   report via [`analyse_deal`]
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             deal_risk (L3)              │
//! ├─────────────────────────────────────────┤
//! │  break_even  - Break-even occupancy     │
//! │  scenarios/  - Presets, sensitivity,    │
//! │                stress test              │
//! │  analyzer    - RiskAnalyzer, buffers    │
//! │  metrics     - DealMetrics, analyse     │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            deal_models (L2)             │
//! │  FinancialModel, ScoringEngine          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation of every result type (default)
//! - `parallel`: Evaluate sensitivity presets on the rayon thread pool
//!
//! ## Example
//!
//! ```
//! use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
//! use deal_models::{FinancialModel, InvestmentRecommendation};
//! use deal_risk::DealAnalyzer;
//!
//! let property = PropertyInputs {
//!     purchase_price: 450_000.0,
//!     year_built: 1985,
//!     monthly_rent_per_unit: 2_400.0,
//!     repairs_per_unit_per_year: 1_200.0,
//!     annual_taxes: 8_500.0,
//!     annual_insurance: 2_400.0,
//!     ..Default::default()
//! };
//! let financing = FinancingTerms::from_ltv(0.75, 0.07, 30);
//!
//! let metrics = DealAnalyzer::new(FinancialModel::new(2026))
//!     .analyse(&property, &financing, &Thresholds::default());
//!
//! assert!(metrics.deal_economics.annual_cash_flow < 0.0);
//! assert_eq!(metrics.recommendation, InvestmentRecommendation::Pass);
//! assert_eq!(metrics.risk_buffers.sensitivity_analysis.len(), 6);
//! ```

#![deny(missing_docs)]

pub mod analyzer;
pub mod break_even;
pub mod metrics;
pub mod scenarios;

pub use analyzer::{RiskAnalyzer, RiskBuffers};
pub use break_even::break_even_occupancy;
pub use metrics::{analyse_deal, DealAnalyzer, DealMetrics};
pub use scenarios::{
    SensitivityKind, SensitivityPreset, SensitivityResult, StressTestResult,
};
