//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from the boundary solver
//! - `InputError`: Structural validation failures raised at the input boundary
//!
//! The financial model itself is total; these errors only surface from
//! solver misconfiguration or from explicit validation by a collaborator.

use thiserror::Error;

/// Boundary solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to reach tolerance within the iteration cap
/// - `InvalidBracket`: Lower bound is not below the upper bound
/// - `NumericalInstability`: Function returned a non-finite value
///
/// # Examples
/// ```
/// use deal_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Bracket endpoints are not ordered (`lo` must be strictly below `hi`).
    #[error("Invalid bracket: [{lo}, {hi}]")]
    InvalidBracket {
        /// Lower bracket endpoint
        lo: f64,
        /// Upper bracket endpoint
        hi: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Structural input validation errors.
///
/// Raised by [`PropertyInputs::validate`](crate::types::PropertyInputs::validate)
/// and [`FinancingTerms::validate`](crate::types::FinancingTerms::validate).
/// The pure model never calls these; they exist for the collaborator that
/// accepts user input.
///
/// # Examples
/// ```
/// use deal_core::types::InputError;
///
/// let err = InputError::Negative { field: "unit_count", value: -1.0 };
/// assert_eq!(format!("{}", err), "unit_count must not be negative, got -1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InputError {
    /// A field that must be non-negative was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A fractional field fell outside `[0, 1]`.
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A field was NaN or infinite.
    #[error("{field} must be finite")]
    NotFinite {
        /// Field name
        field: &'static str,
    },

    /// Loan term outside the supported range of years.
    #[error("loan_term_years must be within [{min}, {max}], got {years}")]
    LoanTermOutOfRange {
        /// Offending term
        years: u32,
        /// Shortest accepted term
        min: u32,
        /// Longest accepted term
        max: u32,
    },

    /// Neither purchase nor asking price is positive.
    #[error("either purchase_price or asking_price must be positive")]
    MissingPrice,
}
