//! Scoring of deal economics against investor thresholds.

use std::fmt;

use deal_core::types::{Ratio, Thresholds, UndefinedReason};

use super::recommendation::InvestmentRecommendation;
use super::tiers::{score_metric, MetricDirection, MetricScore};
use crate::financial::DealEconomics;

/// The four metrics that make up the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoreMetric {
    /// In-place cap rate vs `target_cap_rate`
    CapRate,
    /// Cash-on-cash return vs `target_cash_on_cash`
    CashOnCash,
    /// Debt service coverage vs `target_dscr`
    Dscr,
    /// Monthly cash flow vs `target_monthly_cash_flow`
    MonthlyCashFlow,
}

impl CoreMetric {
    /// All core metrics in display order.
    pub const ALL: [CoreMetric; 4] = [
        CoreMetric::CapRate,
        CoreMetric::CashOnCash,
        CoreMetric::Dscr,
        CoreMetric::MonthlyCashFlow,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            CoreMetric::CapRate => "Cap Rate",
            CoreMetric::CashOnCash => "Cash-on-Cash",
            CoreMetric::Dscr => "DSCR",
            CoreMetric::MonthlyCashFlow => "Monthly Cash Flow",
        }
    }

    /// All core metrics are higher-is-better.
    pub fn direction(&self) -> MetricDirection {
        MetricDirection::HigherIsBetter
    }

    fn target(&self, thresholds: &Thresholds) -> f64 {
        match self {
            CoreMetric::CapRate => thresholds.target_cap_rate,
            CoreMetric::CashOnCash => thresholds.target_cash_on_cash,
            CoreMetric::Dscr => thresholds.target_dscr,
            CoreMetric::MonthlyCashFlow => thresholds.target_monthly_cash_flow,
        }
    }

    fn raw_value(&self, economics: &DealEconomics) -> Ratio {
        match self {
            CoreMetric::CapRate => economics.in_place_cap_rate,
            CoreMetric::CashOnCash => economics.cash_on_cash_return,
            CoreMetric::Dscr => economics.dscr,
            CoreMetric::MonthlyCashFlow => Ratio::Value(economics.monthly_cash_flow),
        }
    }
}

impl fmt::Display for CoreMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One metric classified against its target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredMetric {
    /// Which metric
    pub metric: CoreMetric,
    /// Value as computed by the financial model
    pub raw_value: Ratio,
    /// Target the value was graded against
    pub display_threshold: f64,
    /// Tier, or `None` when the value is undefined and cannot be graded
    pub score: Option<MetricScore>,
}

/// Relative weight of each core metric in the overall score.
///
/// Defaults to equal weighting. Weights need not sum to one; the overall
/// score divides by the total weight of the metrics that were scored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringWeights {
    /// Cap rate weight
    pub cap_rate: f64,
    /// Cash-on-cash weight
    pub cash_on_cash: f64,
    /// DSCR weight
    pub dscr: f64,
    /// Monthly cash flow weight
    pub monthly_cash_flow: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cap_rate: 1.0,
            cash_on_cash: 1.0,
            dscr: 1.0,
            monthly_cash_flow: 1.0,
        }
    }
}

impl ScoringWeights {
    /// Weight for `metric`, floored at zero.
    pub fn weight(&self, metric: CoreMetric) -> f64 {
        let w = match metric {
            CoreMetric::CapRate => self.cap_rate,
            CoreMetric::CashOnCash => self.cash_on_cash,
            CoreMetric::Dscr => self.dscr,
            CoreMetric::MonthlyCashFlow => self.monthly_cash_flow,
        };
        if w.is_finite() {
            w.max(0.0)
        } else {
            0.0
        }
    }
}

/// Scored metrics, overall score and recommendation for one deal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreCard {
    /// Per-metric grades in [`CoreMetric::ALL`] order
    pub scored_metrics: Vec<ScoredMetric>,
    /// Weighted average of tier points, in `[0, 100]`
    pub overall_score: f64,
    /// Band of `overall_score`
    pub recommendation: InvestmentRecommendation,
}

/// Grades deal economics against investor thresholds.
///
/// # Examples
/// ```
/// use deal_core::types::{Ratio, Thresholds};
/// use deal_models::scoring::{MetricScore, ScoringEngine};
///
/// let engine = ScoringEngine::default();
/// let tier = engine.score_ratio(Ratio::Value(0.07), 0.06);
/// assert_eq!(tier, Some(MetricScore::Exceeds));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    /// Engine with custom weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Grade a higher-is-better ratio.
    ///
    /// Undefined coverage from having no debt service grades `Exceeds`; any
    /// other undefined ratio is left ungraded rather than counted as a failure.
    pub fn score_ratio(&self, value: Ratio, target: f64) -> Option<MetricScore> {
        match value {
            Ratio::Value(v) => Some(score_metric(v, target, MetricDirection::HigherIsBetter)),
            Ratio::Undefined(UndefinedReason::NoDebtService) => Some(MetricScore::Exceeds),
            Ratio::Undefined(_) => None,
        }
    }

    /// Grade every core metric.
    pub fn score_metrics(
        &self,
        economics: &DealEconomics,
        thresholds: &Thresholds,
    ) -> Vec<ScoredMetric> {
        CoreMetric::ALL
            .iter()
            .map(|metric| {
                let raw_value = metric.raw_value(economics);
                let target = metric.target(thresholds);
                ScoredMetric {
                    metric: *metric,
                    raw_value,
                    display_threshold: target,
                    score: self.score_ratio(raw_value, target),
                }
            })
            .collect()
    }

    /// Weighted average of tier points over the graded metrics.
    ///
    /// Ungraded metrics drop out and the remaining weights are renormalised.
    /// Returns 0 when nothing could be graded.
    pub fn overall_score(&self, metrics: &[ScoredMetric]) -> f64 {
        let (weighted, total_weight) = metrics
            .iter()
            .filter_map(|m| m.score.map(|s| (self.weights.weight(m.metric), s.points())))
            .fold((0.0, 0.0), |(acc, total), (w, points)| {
                (acc + w * points, total + w)
            });
        if total_weight > 0.0 {
            (weighted / total_weight).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Grade a deal end to end.
    pub fn score_deal(&self, economics: &DealEconomics, thresholds: &Thresholds) -> ScoreCard {
        let scored_metrics = self.score_metrics(economics, thresholds);
        let overall_score = self.overall_score(&scored_metrics);
        ScoreCard {
            recommendation: InvestmentRecommendation::from_score(overall_score),
            scored_metrics,
            overall_score,
        }
    }
}
