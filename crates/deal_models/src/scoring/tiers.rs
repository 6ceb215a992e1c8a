//! Ordinal metric tiers.

use std::fmt;

/// Ordinal classification of a metric against its target.
///
/// Ordered `Fails < Borderline < Meets < Exceeds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MetricScore {
    /// Well short of target
    Fails,
    /// Within the tolerance band below target
    Borderline,
    /// At or above target
    Meets,
    /// Comfortably clear of target
    Exceeds,
}

impl MetricScore {
    /// All tiers, lowest first.
    pub const ALL: [MetricScore; 4] = [
        MetricScore::Fails,
        MetricScore::Borderline,
        MetricScore::Meets,
        MetricScore::Exceeds,
    ];

    /// Position in the ordering, 0 for `Fails`.
    pub fn rank(&self) -> u8 {
        match self {
            MetricScore::Fails => 0,
            MetricScore::Borderline => 1,
            MetricScore::Meets => 2,
            MetricScore::Exceeds => 3,
        }
    }

    /// Points contributed to the overall score.
    pub fn points(&self) -> f64 {
        match self {
            MetricScore::Fails => 0.0,
            MetricScore::Borderline => 33.0,
            MetricScore::Meets => 66.0,
            MetricScore::Exceeds => 100.0,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            MetricScore::Fails => "Fails",
            MetricScore::Borderline => "Borderline",
            MetricScore::Meets => "Meets",
            MetricScore::Exceeds => "Exceeds",
        }
    }
}

impl fmt::Display for MetricScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of the target is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MetricDirection {
    /// Larger values are better (returns, coverage)
    HigherIsBetter,
    /// Smaller values are better (expense ratio, break-even occupancy)
    LowerIsBetter,
}

/// Width of the `Exceeds` band, as a fraction of the target's magnitude.
const EXCEEDS_MARGIN: f64 = 0.10;
/// Width of the `Borderline` band, as a fraction of the target's magnitude.
const BORDERLINE_MARGIN: f64 = 0.15;

/// Classify `value` against `target`.
///
/// Higher is better: `Exceeds` from `target + 10%·|target|`, `Meets` from
/// target, `Borderline` from `target − 15%·|target|`. Lower is better mirrors
/// this. Bands are sized on `|target|` so a negative target (a monthly cash
/// flow shortfall, say) keeps the same tier ordering as a positive one.
///
/// # Examples
/// ```
/// use deal_models::scoring::{score_metric, MetricDirection, MetricScore};
///
/// let hi = MetricDirection::HigherIsBetter;
/// assert_eq!(score_metric(0.070, 0.06, hi), MetricScore::Exceeds);
/// assert_eq!(score_metric(0.062, 0.06, hi), MetricScore::Meets);
/// assert_eq!(score_metric(0.052, 0.06, hi), MetricScore::Borderline);
/// assert_eq!(score_metric(0.040, 0.06, hi), MetricScore::Fails);
///
/// let lo = MetricDirection::LowerIsBetter;
/// assert_eq!(score_metric(0.40, 0.50, lo), MetricScore::Exceeds);
/// assert_eq!(score_metric(0.60, 0.50, lo), MetricScore::Fails);
///
/// // Missing a -2,000 target by 100 is borderline, not a win
/// assert_eq!(score_metric(-2_100.0, -2_000.0, hi), MetricScore::Borderline);
/// ```
pub fn score_metric(value: f64, target: f64, direction: MetricDirection) -> MetricScore {
    let scale = target.abs();
    match direction {
        MetricDirection::HigherIsBetter => {
            if value >= target + scale * EXCEEDS_MARGIN {
                MetricScore::Exceeds
            } else if value >= target {
                MetricScore::Meets
            } else if value >= target - scale * BORDERLINE_MARGIN {
                MetricScore::Borderline
            } else {
                MetricScore::Fails
            }
        }
        MetricDirection::LowerIsBetter => {
            if value <= target - scale * EXCEEDS_MARGIN {
                MetricScore::Exceeds
            } else if value <= target {
                MetricScore::Meets
            } else if value <= target + scale * BORDERLINE_MARGIN {
                MetricScore::Borderline
            } else {
                MetricScore::Fails
            }
        }
    }
}
