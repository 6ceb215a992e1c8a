//! Grid searches for the highest feasible price.
//!
//! Both searches take the feasibility predicate as an explicit argument so
//! they can be exercised without the financial model. Under a predicate that
//! is monotone (feasible prices form a prefix of the grid) they return the
//! same price; [`GridBisection`] just needs fewer evaluations to get there.

use std::fmt;
use std::str::FromStr;

use crate::grid::PriceGrid;

/// Reason reported when no grid price satisfies the predicate.
pub const NO_FEASIBLE_PRICE: &str = "no price in range meets all targets";

/// Result of a price search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum PriceSearchOutcome {
    /// A feasible grid price was found.
    Feasible {
        /// Highest feasible price found
        price: f64,
        /// Number of predicate evaluations spent
        evaluations: usize,
    },
    /// No admissible price satisfies every target.
    Infeasible {
        /// Human-readable cause
        reason: String,
    },
}

impl PriceSearchOutcome {
    /// Infeasible outcome with the given reason.
    pub fn infeasible(reason: impl Into<String>) -> Self {
        Self::Infeasible {
            reason: reason.into(),
        }
    }

    /// The feasible price, if any.
    pub fn price(&self) -> Option<f64> {
        match self {
            Self::Feasible { price, .. } => Some(*price),
            Self::Infeasible { .. } => None,
        }
    }

    /// Whether a feasible price was found.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }
}

/// A search over a [`PriceGrid`] for the highest price satisfying a predicate.
pub trait PriceSearch {
    /// Find the highest feasible grid price.
    ///
    /// # Arguments
    ///
    /// * `grid` - Admissible prices
    /// * `is_feasible` - Pure predicate over a candidate price
    fn search<F>(&self, grid: &PriceGrid, is_feasible: F) -> PriceSearchOutcome
    where
        F: Fn(f64) -> bool;
}

/// Two-phase linear scan.
///
/// Descends from the asking price one step at a time until a feasible price
/// appears (or the floor is passed), then ascends from it back toward the
/// asking price, keeping the last feasible price and stopping at the first
/// infeasible one. The result never exceeds the asking price.
///
/// # Examples
/// ```
/// use deal_optimiser::{LinearGridScan, PriceGrid, PriceSearch};
///
/// let grid = PriceGrid::for_asking_price(100_000.0);
/// let outcome = LinearGridScan.search(&grid, |price| price <= 92_000.0);
/// assert_eq!(outcome.price(), Some(90_000.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearGridScan;

impl PriceSearch for LinearGridScan {
    fn search<F>(&self, grid: &PriceGrid, is_feasible: F) -> PriceSearchOutcome
    where
        F: Fn(f64) -> bool,
    {
        let Some(steps_below) = grid.steps_below() else {
            return PriceSearchOutcome::infeasible(NO_FEASIBLE_PRICE);
        };
        let mut evaluations = 0;
        let mut check = |offset: i64| {
            evaluations += 1;
            let price = grid.price_at(offset);
            let feasible = is_feasible(price);
            tracing::trace!(price, feasible, "evaluated candidate price");
            feasible
        };

        // Descent
        let Some(mut best) = (0..=steps_below).map(|k| -k).find(|&offset| check(offset)) else {
            return PriceSearchOutcome::infeasible(NO_FEASIBLE_PRICE);
        };

        // Ascent, bounded by the asking price at offset 0
        while best < 0 && check(best + 1) {
            best += 1;
        }

        PriceSearchOutcome::Feasible {
            price: grid.price_at(best),
            evaluations,
        }
    }
}

/// Bisection over grid offsets.
///
/// Assumes the feasible prices form a prefix of the grid. Checks the floor
/// first, then halves the bracket between the highest known feasible offset
/// and the lowest known infeasible one, searching no higher than the asking
/// price.
///
/// # Examples
/// ```
/// use deal_optimiser::{GridBisection, LinearGridScan, PriceGrid, PriceSearch};
///
/// let grid = PriceGrid::for_asking_price(400_000.0);
/// let feasible = |price: f64| price <= 437_500.0;
/// assert_eq!(
///     GridBisection.search(&grid, feasible).price(),
///     LinearGridScan.search(&grid, feasible).price(),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridBisection;

impl PriceSearch for GridBisection {
    fn search<F>(&self, grid: &PriceGrid, is_feasible: F) -> PriceSearchOutcome
    where
        F: Fn(f64) -> bool,
    {
        let Some(steps_below) = grid.steps_below() else {
            return PriceSearchOutcome::infeasible(NO_FEASIBLE_PRICE);
        };
        let mut evaluations = 0;
        let mut check = |offset: i64| {
            evaluations += 1;
            let price = grid.price_at(offset);
            let feasible = is_feasible(price);
            tracing::trace!(price, feasible, "evaluated candidate price");
            feasible
        };

        let mut lo = -steps_below;
        if !check(lo) {
            return PriceSearchOutcome::infeasible(NO_FEASIBLE_PRICE);
        }
        // hi is one step above asking and treated as infeasible
        let mut hi = 1;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if check(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        PriceSearchOutcome::Feasible {
            price: grid.price_at(lo),
            evaluations,
        }
    }
}

/// Selectable search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchStrategy {
    /// [`LinearGridScan`]
    #[default]
    Linear,
    /// [`GridBisection`]
    Bisection,
}

impl SearchStrategy {
    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Bisection => "bisection",
        }
    }
}

impl PriceSearch for SearchStrategy {
    fn search<F>(&self, grid: &PriceGrid, is_feasible: F) -> PriceSearchOutcome
    where
        F: Fn(f64) -> bool,
    {
        match self {
            Self::Linear => LinearGridScan.search(grid, is_feasible),
            Self::Bisection => GridBisection.search(grid, is_feasible),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "bisection" => Ok(Self::Bisection),
            _ => Err(format!(
                "Invalid search strategy: {}. Valid values: linear, bisection",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(limit: f64) -> impl Fn(f64) -> bool {
        move |price| price <= limit
    }

    #[test]
    fn test_linear_descends_to_first_feasible() {
        let grid = PriceGrid::for_asking_price(300_000.0);
        let outcome = LinearGridScan.search(&grid, threshold(272_500.0));
        // 300k..270k descending (7), then one failed step up to 275k
        assert_eq!(
            outcome,
            PriceSearchOutcome::Feasible {
                price: 270_000.0,
                evaluations: 8,
            }
        );
    }

    #[test]
    fn test_feasible_asking_returns_asking() {
        let grid = PriceGrid::for_asking_price(300_000.0);
        let outcome = LinearGridScan.search(&grid, threshold(331_000.0));
        // asking is checked first and nothing above it is tried
        assert_eq!(
            outcome,
            PriceSearchOutcome::Feasible {
                price: 300_000.0,
                evaluations: 1,
            }
        );
        assert_eq!(
            GridBisection.search(&grid, threshold(331_000.0)).price(),
            Some(300_000.0)
        );
    }

    #[test]
    fn test_everything_feasible_stops_at_asking() {
        let grid = PriceGrid::for_asking_price(300_000.0);
        for outcome in [
            LinearGridScan.search(&grid, |_| true),
            GridBisection.search(&grid, |_| true),
        ] {
            assert_eq!(outcome.price(), Some(300_000.0));
        }
    }

    #[test]
    fn test_ascent_never_checks_above_asking() {
        use std::cell::Cell;

        let grid = PriceGrid::for_asking_price(300_000.0);
        let highest = Cell::new(f64::MIN);
        let outcome = LinearGridScan.search(&grid, |price| {
            highest.set(highest.get().max(price));
            price <= 272_500.0
        });
        assert_eq!(outcome.price(), Some(270_000.0));
        assert_eq!(highest.get(), 300_000.0);
    }

    #[test]
    fn test_nothing_feasible() {
        let grid = PriceGrid::for_asking_price(300_000.0);
        for outcome in [
            LinearGridScan.search(&grid, |_| false),
            GridBisection.search(&grid, |_| false),
        ] {
            assert_eq!(outcome, PriceSearchOutcome::infeasible(NO_FEASIBLE_PRICE));
            assert!(!outcome.is_feasible());
            assert_eq!(outcome.price(), None);
        }
    }

    #[test]
    fn test_floor_is_the_last_candidate() {
        let grid = PriceGrid::for_asking_price(300_000.0);
        let floor_only = threshold(210_000.0);
        assert_eq!(LinearGridScan.search(&grid, &floor_only).price(), Some(210_000.0));
        assert_eq!(GridBisection.search(&grid, &floor_only).price(), Some(210_000.0));
        let below_floor = threshold(209_999.0);
        assert!(!LinearGridScan.search(&grid, &below_floor).is_feasible());
        assert!(!GridBisection.search(&grid, &below_floor).is_feasible());
    }

    #[test]
    fn test_asking_below_floor_is_infeasible() {
        let grid = PriceGrid::for_asking_price(30_000.0);
        assert!(!LinearGridScan.search(&grid, |_| true).is_feasible());
        assert!(!GridBisection.search(&grid, |_| true).is_feasible());
    }

    #[test]
    fn test_bisection_uses_fewer_evaluations() {
        let grid = PriceGrid::for_asking_price(1_000_000.0);
        let linear = LinearGridScan.search(&grid, threshold(702_000.0));
        let bisection = GridBisection.search(&grid, threshold(702_000.0));
        assert_eq!(linear.price(), Some(700_000.0));
        assert_eq!(bisection.price(), linear.price());
        match (linear, bisection) {
            (
                PriceSearchOutcome::Feasible { evaluations: l, .. },
                PriceSearchOutcome::Feasible { evaluations: b, .. },
            ) => assert!(b < l, "bisection {} vs linear {}", b, l),
            other => panic!("expected feasible outcomes, got {:?}", other),
        }
    }

    #[test]
    fn test_strategy_dispatch_and_parse() {
        let grid = PriceGrid::for_asking_price(200_000.0);
        for strategy in [SearchStrategy::Linear, SearchStrategy::Bisection] {
            assert_eq!(strategy.search(&grid, threshold(187_000.0)).price(), Some(185_000.0));
            assert_eq!(strategy.as_str().parse::<SearchStrategy>(), Ok(strategy));
        }
        assert_eq!("BISECTION".parse::<SearchStrategy>(), Ok(SearchStrategy::Bisection));
        assert!("golden".parse::<SearchStrategy>().is_err());
        assert_eq!(SearchStrategy::default(), SearchStrategy::Linear);
        assert_eq!(SearchStrategy::Bisection.to_string(), "bisection");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn linear_and_bisection_agree_on_monotone_predicates(
                asking in 20_000.0f64..2_000_000.0,
                limit_fraction in 0.0f64..1.6,
            ) {
                let grid = PriceGrid::for_asking_price(asking);
                let limit = asking * limit_fraction;
                let linear = LinearGridScan.search(&grid, threshold(limit));
                let bisection = GridBisection.search(&grid, threshold(limit));
                prop_assert_eq!(linear.price(), bisection.price());
            }

            #[test]
            fn found_price_is_feasible_and_on_grid(
                asking in 100_000.0f64..2_000_000.0,
                limit_fraction in 0.75f64..1.3,
            ) {
                let grid = PriceGrid::for_asking_price(asking);
                let limit = asking * limit_fraction;
                let outcome = LinearGridScan.search(&grid, threshold(limit));
                let price = outcome.price().unwrap();
                prop_assert!(price <= limit);
                prop_assert!(price >= grid.floor() - 1e-6 && price <= asking);
                let offset = (price - asking) / grid.step();
                prop_assert!((offset - offset.round()).abs() < 1e-9);
                // next grid point up is either infeasible or above asking
                prop_assert!(price + grid.step() > limit || price + grid.step() > asking);
            }
        }
    }
}
