//! Solver configuration types.

use num_traits::Float;

/// How finely a vacancy or rate boundary is resolved.
///
/// The default stops once the bracket is one basis point wide, which takes
/// 14 halvings on the `[0, 1]` vacancy range.
///
/// ```
/// use deal_core::math::solvers::SolverConfig;
///
/// let bp: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(bp.halvings_for(1.0), Some(14));
///
/// let coarse = bp.with_tolerance(0.01);
/// assert_eq!(coarse.halvings_for(0.5), Some(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Bracket width at which the search stops.
    pub tolerance: T,

    /// Maximum number of bisection steps before giving up.
    ///
    /// If the bracket is still wider than `tolerance` after this many steps
    /// the solver returns `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// One basis point, at most 100 halvings.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-4).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// 1e-8 tolerance with room for 200 halvings.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-8).unwrap_or_else(T::epsilon),
            max_iterations: 200,
        }
    }

    /// Same iteration cap, different tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0`.
    pub fn with_tolerance(self, tolerance: T) -> Self {
        Self::new(tolerance, self.max_iterations)
    }

    /// Halvings needed to shrink a bracket of `width` to the tolerance, or
    /// `None` when that exceeds `max_iterations`.
    pub fn halvings_for(&self, width: T) -> Option<usize> {
        let mut width = width.abs();
        let mut halvings = 0;
        while width > self.tolerance {
            if halvings == self.max_iterations {
                return None;
            }
            width = width / (T::one() + T::one());
            halvings += 1;
        }
        Some(halvings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_point_default() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-4);
        assert_eq!(config.max_iterations, 100);
        // Interest rate bracket [0, 0.5]
        assert_eq!(config.halvings_for(0.5), Some(13));
    }

    #[test]
    fn test_tolerance_override_keeps_cap() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-6, 30).with_tolerance(1e-3);
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.max_iterations, 30);
    }

    #[test]
    fn test_halvings_exceed_cap() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12, 2);
        assert_eq!(config.halvings_for(1.0), None);
        assert_eq!(config.halvings_for(0.0), Some(0));
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_zero_tolerance_panics() {
        let _ = SolverConfig::<f64>::default().with_tolerance(0.0);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-4, 0);
    }

    #[test]
    fn test_high_precision_fits_rate_bracket() {
        let config: SolverConfig<f64> = SolverConfig::high_precision();
        assert!(config.halvings_for(0.5).is_some());
    }
}
