//! Discretised purchase price domain.

/// Lower edge of the domain as a fraction of asking price.
pub const FLOOR_FRACTION: f64 = 0.70;
/// Absolute minimum price considered.
pub const MIN_FLOOR_PRICE: f64 = 50_000.0;
/// Upper edge of the domain as a fraction of asking price.
pub const CEILING_FRACTION: f64 = 1.30;
/// Grid spacing in dollars.
pub const GRID_STEP: f64 = 5_000.0;

/// Slack when counting whole steps between two prices.
const STEP_EPSILON: f64 = 1e-9;

/// Price grid anchored at the asking price.
///
/// Grid points are `asking + offset × step` for integer offsets in
/// `[-steps_below, steps_above]`, all within `[floor, ceiling]`.
///
/// # Examples
/// ```
/// use deal_optimiser::PriceGrid;
///
/// let grid = PriceGrid::for_asking_price(450_000.0);
/// assert_eq!(grid.floor(), 315_000.0);
/// assert_eq!(grid.ceiling(), 585_000.0);
/// assert_eq!(grid.steps_below(), Some(27));
/// assert_eq!(grid.price_at(-27), 315_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceGrid {
    asking_price: f64,
    floor: f64,
    ceiling: f64,
    step: f64,
}

impl PriceGrid {
    /// The standard domain `[max(0.7 × asking, 50,000), 1.3 × asking]` on a $5,000 grid.
    pub fn for_asking_price(asking_price: f64) -> Self {
        Self {
            asking_price,
            floor: (asking_price * FLOOR_FRACTION).max(MIN_FLOOR_PRICE),
            ceiling: asking_price * CEILING_FRACTION,
            step: GRID_STEP,
        }
    }

    /// A custom grid.
    ///
    /// # Panics
    ///
    /// Panics if `step <= 0`.
    pub fn new(asking_price: f64, floor: f64, ceiling: f64, step: f64) -> Self {
        assert!(step > 0.0, "step must be positive");
        Self {
            asking_price,
            floor,
            ceiling,
            step,
        }
    }

    /// Anchor price (offset 0).
    pub fn asking_price(&self) -> f64 {
        self.asking_price
    }

    /// Lowest admissible price.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Highest admissible price.
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Grid spacing.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Price at `offset` steps from the asking price.
    pub fn price_at(&self, offset: i64) -> f64 {
        self.asking_price + offset as f64 * self.step
    }

    /// Whole steps from the asking price down to the floor, or `None` if the
    /// asking price itself lies below the floor.
    pub fn steps_below(&self) -> Option<i64> {
        whole_steps(self.asking_price - self.floor, self.step)
    }

    /// Whole steps from the asking price up to the ceiling (0 if none fit).
    pub fn steps_above(&self) -> i64 {
        whole_steps(self.ceiling - self.asking_price, self.step).unwrap_or(0)
    }
}

fn whole_steps(distance: f64, step: f64) -> Option<i64> {
    if !distance.is_finite() || distance < -STEP_EPSILON {
        return None;
    }
    Some((distance / step + STEP_EPSILON).floor().max(0.0) as i64)
}
