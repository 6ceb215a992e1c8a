//! Bisection search for the zero boundary of a monotone function.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Where a non-increasing function stops being non-negative on a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary<T: Float> {
    /// `f` changes sign inside the bracket; the value is the largest point
    /// found with `f >= 0`, within tolerance of the true crossing.
    Crossing(T),
    /// `f` is already negative at the lower bound.
    NegativeAtLower(T),
    /// `f` is still non-negative at the upper bound.
    NonNegativeAtUpper(T),
}

impl<T: Float> Boundary<T> {
    /// The boundary clamped to the bracket.
    pub fn value(&self) -> T {
        match *self {
            Boundary::Crossing(x)
            | Boundary::NegativeAtLower(x)
            | Boundary::NonNegativeAtUpper(x) => x,
        }
    }

    /// Whether the crossing lies strictly inside the bracket.
    pub fn is_interior(&self) -> bool {
        matches!(self, Boundary::Crossing(_))
    }
}

/// Bisection solver for monotonically non-increasing functions.
///
/// Keeps a bracket `[lo, hi]` with `f(lo) >= 0` and `f(hi) < 0` and halves
/// it until it is narrower than the configured tolerance. The returned point
/// is always on the non-negative side, so callers get a conservative bound.
///
/// # Example
///
/// ```
/// use deal_core::math::solvers::{Boundary, BoundarySolver, SolverConfig};
///
/// let solver = BoundarySolver::new(SolverConfig::default());
///
/// // Never crosses zero inside [0, 0.5]
/// let always_positive = |_: f64| 1.0;
/// assert_eq!(
///     solver.find_boundary(always_positive, 0.0, 0.5).unwrap(),
///     Boundary::NonNegativeAtUpper(0.5)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BoundarySolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BoundarySolver<T> {
    /// Create a new solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Locate the last point in `[lo, hi]` where the non-increasing function
    /// `f` is still non-negative.
    ///
    /// # Returns
    ///
    /// * `Ok(Boundary::Crossing(x))` - `f(x) >= 0` and the true crossing is within tolerance above `x`
    /// * `Ok(Boundary::NegativeAtLower(lo))` - `f(lo) < 0`
    /// * `Ok(Boundary::NonNegativeAtUpper(hi))` - `f(hi) >= 0`
    /// * `Err(SolverError::InvalidBracket)` - `lo >= hi`
    /// * `Err(SolverError::NumericalInstability)` - `f` returned NaN
    /// * `Err(SolverError::MaxIterationsExceeded)` - bracket still too wide at the iteration cap
    pub fn find_boundary<F>(&self, f: F, lo: T, hi: T) -> Result<Boundary<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        if lo.is_nan() || hi.is_nan() || lo >= hi {
            return Err(SolverError::InvalidBracket {
                lo: lo.to_f64().unwrap_or(f64::NAN),
                hi: hi.to_f64().unwrap_or(f64::NAN),
            });
        }

        let f_lo = evaluate(&f, lo)?;
        if f_lo < T::zero() {
            return Ok(Boundary::NegativeAtLower(lo));
        }
        let f_hi = evaluate(&f, hi)?;
        if f_hi >= T::zero() {
            return Ok(Boundary::NonNegativeAtUpper(hi));
        }

        let two = T::one() + T::one();
        let mut lo = lo;
        let mut hi = hi;

        for _iteration in 0..self.config.max_iterations {
            if hi - lo <= self.config.tolerance {
                return Ok(Boundary::Crossing(lo));
            }
            let mid = lo + (hi - lo) / two;
            if evaluate(&f, mid)? >= T::zero() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        if hi - lo <= self.config.tolerance {
            Ok(Boundary::Crossing(lo))
        } else {
            Err(SolverError::MaxIterationsExceeded {
                iterations: self.config.max_iterations,
            })
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

fn evaluate<T: Float, F: Fn(T) -> T>(f: &F, x: T) -> Result<T, SolverError> {
    let y = f(x);
    if y.is_nan() {
        return Err(SolverError::NumericalInstability(format!(
            "function returned NaN at x = {}",
            x.to_f64().unwrap_or(f64::NAN)
        )));
    }
    Ok(y)
}
