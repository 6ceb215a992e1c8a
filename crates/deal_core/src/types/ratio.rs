//! Guarded ratio values.
//!
//! Every return metric in the underwriting model is a quotient whose
//! denominator can legitimately be zero (no purchase price, no income, an
//! all-cash or fully financed deal). [`Ratio`] keeps those cases explicit
//! instead of letting NaN or infinity leak into scoring and search.

use std::fmt;

/// Why a ratio could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UndefinedReason {
    /// Purchase price is zero or negative.
    ZeroPrice,
    /// Gross or effective income is zero or negative.
    ZeroIncome,
    /// Total cash invested is zero or negative.
    ZeroCashInvested,
    /// There is no debt service (all-cash purchase or zero payment).
    NoDebtService,
}

impl UndefinedReason {
    /// Short machine-friendly label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroPrice => "zero_price",
            Self::ZeroIncome => "zero_income",
            Self::ZeroCashInvested => "zero_cash_invested",
            Self::NoDebtService => "no_debt_service",
        }
    }
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quotient that is either a finite value or explicitly undefined.
///
/// # Examples
/// ```
/// use deal_core::types::{Ratio, UndefinedReason};
///
/// let cap_rate = Ratio::checked(30_000.0, 500_000.0, UndefinedReason::ZeroPrice);
/// assert_eq!(cap_rate.as_option(), Some(0.06));
///
/// let dscr = Ratio::checked(30_000.0, 0.0, UndefinedReason::NoDebtService);
/// assert_eq!(dscr.undefined_reason(), Some(UndefinedReason::NoDebtService));
/// assert_eq!(dscr.value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Ratio {
    /// A finite computed value.
    Value(f64),
    /// The denominator was non-positive.
    Undefined(UndefinedReason),
}

impl Ratio {
    /// Divide `numerator` by `denominator`, yielding `Undefined(reason)` when
    /// the denominator is non-positive or the quotient is not finite.
    pub fn checked(numerator: f64, denominator: f64, reason: UndefinedReason) -> Self {
        if denominator > 0.0 {
            let q = numerator / denominator;
            if q.is_finite() {
                return Ratio::Value(q);
            }
        }
        Ratio::Undefined(reason)
    }

    /// Sentinel value: the quotient, or `0.0` when undefined.
    pub fn value(&self) -> f64 {
        match self {
            Ratio::Value(v) => *v,
            Ratio::Undefined(_) => 0.0,
        }
    }

    /// The quotient if defined.
    pub fn as_option(&self) -> Option<f64> {
        match self {
            Ratio::Value(v) => Some(*v),
            Ratio::Undefined(_) => None,
        }
    }

    /// Whether a finite value was computed.
    pub fn is_defined(&self) -> bool {
        matches!(self, Ratio::Value(_))
    }

    /// The reason this ratio is undefined, if it is.
    pub fn undefined_reason(&self) -> Option<UndefinedReason> {
        match self {
            Ratio::Value(_) => None,
            Ratio::Undefined(reason) => Some(*reason),
        }
    }

    /// Whether the ratio clears a minimum `target`.
    ///
    /// Undefined ratios never clear a target, except `NoDebtService`,
    /// whose coverage is unbounded.
    pub fn at_least(&self, target: f64) -> bool {
        match self {
            Ratio::Value(v) => *v >= target,
            Ratio::Undefined(UndefinedReason::NoDebtService) => true,
            Ratio::Undefined(_) => false,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Value(v) => write!(f, "{}", v),
            Ratio::Undefined(reason) => write!(f, "undefined ({})", reason),
        }
    }
}
