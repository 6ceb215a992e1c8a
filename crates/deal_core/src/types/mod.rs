//! Core input, ratio and error types.
//!
//! This module provides:
//! - `inputs`: Property, financing and investor threshold assumptions
//! - `ratio`: Guarded ratio values with explicit undefined markers
//! - `error`: Structured error types for solver and input validation failures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PropertyInputs`], [`FinancingTerms`], [`Thresholds`] from `inputs`
//! - [`Ratio`], [`UndefinedReason`] from `ratio`
//! - [`SolverError`], [`InputError`] from `error`

pub mod error;
pub mod inputs;
pub mod ratio;

pub use error::{InputError, SolverError};
pub use inputs::{FinancingTerms, PropertyInputs, Thresholds};
pub use ratio::{Ratio, UndefinedReason};
