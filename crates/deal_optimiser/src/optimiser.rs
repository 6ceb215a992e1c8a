//! Maximum feasible purchase price.

use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
use deal_models::FinancialModel;

use crate::feasibility::FeasibilityCheck;
use crate::grid::PriceGrid;
use crate::search::{PriceSearch, PriceSearchOutcome, SearchStrategy};

/// Reason reported for a listing without a positive asking price.
pub const NON_POSITIVE_ASKING: &str = "asking price must be positive";

/// Finds the highest grid price at which a deal still meets its thresholds.
///
/// The domain is [`PriceGrid::for_asking_price`] around the property's asking
/// price. Rent, expenses, LTV and rate stay fixed; only the price moves.
///
/// # Examples
///
/// ```
/// use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
/// use deal_models::FinancialModel;
/// use deal_optimiser::{PriceOptimiser, SearchStrategy};
///
/// // Rents far below what the price supports
/// let property = PropertyInputs {
///     purchase_price: 450_000.0,
///     asking_price: 450_000.0,
///     year_built: 1985,
///     monthly_rent_per_unit: 2_400.0,
///     repairs_per_unit_per_year: 1_200.0,
///     annual_taxes: 8_500.0,
///     annual_insurance: 2_400.0,
///     ..Default::default()
/// };
/// let financing = FinancingTerms::from_ltv(0.75, 0.07, 30);
///
/// let optimiser = PriceOptimiser::new(FinancialModel::new(2026))
///     .with_strategy(SearchStrategy::Bisection);
/// let outcome = optimiser.find_max_feasible_price(&property, &financing, &Thresholds::default());
/// assert!(!outcome.is_feasible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceOptimiser {
    model: FinancialModel,
    strategy: SearchStrategy,
}

impl PriceOptimiser {
    /// Create an optimiser with the default linear scan.
    pub fn new(model: FinancialModel) -> Self {
        Self {
            model,
            strategy: SearchStrategy::default(),
        }
    }

    /// Use a different search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The financial model candidates are evaluated with.
    pub fn model(&self) -> &FinancialModel {
        &self.model
    }

    /// The configured search strategy.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Search for the maximum feasible purchase price.
    ///
    /// # Arguments
    ///
    /// * `property` - Deal assumptions; `asking_price` anchors the grid
    /// * `financing` - LTV, rate and term (the loan is re-sized per candidate)
    /// * `thresholds` - Investor targets
    ///
    /// # Returns
    ///
    /// * `Feasible { price, evaluations }` - Highest grid price meeting every target
    /// * `Infeasible { reason }` - Asking price not positive, or no price in range works
    pub fn find_max_feasible_price(
        &self,
        property: &PropertyInputs,
        financing: &FinancingTerms,
        thresholds: &Thresholds,
    ) -> PriceSearchOutcome {
        if property.asking_price.is_nan() || property.asking_price <= 0.0 {
            tracing::debug!(asking_price = property.asking_price, "price search skipped");
            return PriceSearchOutcome::infeasible(NON_POSITIVE_ASKING);
        }

        let grid = PriceGrid::for_asking_price(property.asking_price);
        let check = FeasibilityCheck::new(self.model, property, financing, thresholds);
        let outcome = self.strategy.search(&grid, |price| check.is_feasible(price));

        match &outcome {
            PriceSearchOutcome::Feasible { price, evaluations } => tracing::debug!(
                strategy = %self.strategy,
                asking_price = property.asking_price,
                price,
                evaluations,
                "found maximum feasible price"
            ),
            PriceSearchOutcome::Infeasible { reason } => tracing::debug!(
                strategy = %self.strategy,
                asking_price = property.asking_price,
                reason = reason.as_str(),
                "no feasible price"
            ),
        }
        outcome
    }
}

impl Default for PriceOptimiser {
    fn default() -> Self {
        Self::new(FinancialModel::default())
    }
}

/// [`PriceOptimiser::find_max_feasible_price`] with the current-year model
/// and the linear scan.
pub fn find_max_feasible_price(
    property: &PropertyInputs,
    financing: &FinancingTerms,
    thresholds: &Thresholds,
) -> PriceSearchOutcome {
    PriceOptimiser::default().find_max_feasible_price(property, financing, thresholds)
}
