//! # deal_core: Foundation Types for Deal Underwriting
//!
//! ## Layer 1 (Foundation) Role
//!
//! deal_core is the bottom layer of the underwriting workspace, providing:
//! - Property, financing and threshold inputs (`types::inputs`)
//! - The [`Ratio`](types::Ratio) sentinel type for guarded divisions (`types::ratio`)
//! - Error types: `SolverError`, `InputError` (`types::error`)
//! - A monotone boundary solver built on bisection (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other deal_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional, enabled by default)
//!
//! ## Usage Examples
//!
//! ```rust
//! use deal_core::math::solvers::{Boundary, BoundarySolver, SolverConfig};
//! use deal_core::types::{Ratio, UndefinedReason};
//!
//! // Guarded division never produces NaN or infinity
//! let dscr = Ratio::checked(12_000.0, 0.0, UndefinedReason::NoDebtService);
//! assert!(!dscr.is_defined());
//! assert_eq!(dscr.value(), 0.0);
//!
//! // Largest x in [0, 1] where 0.4 - x stays non-negative
//! let solver = BoundarySolver::new(SolverConfig::new(1e-6, 100));
//! let boundary = solver.find_boundary(|x: f64| 0.4 - x, 0.0, 1.0).unwrap();
//! assert!((boundary.value() - 0.4).abs() < 1e-5);
//! # assert!(matches!(boundary, Boundary::Crossing(_)));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for input and ratio types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
