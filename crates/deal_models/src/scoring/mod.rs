//! Threshold scoring.
//!
//! ## Overview
//!
//! Each core metric is graded into a [`MetricScore`] tier against the
//! investor's target. Tiers carry points (0 / 33 / 66 / 100) which are
//! averaged with [`ScoringWeights`] (equal by default) into an overall score
//! in `[0, 100]`, then banded into an [`InvestmentRecommendation`]:
//!
//! | Overall score | Recommendation |
//! |---------------|----------------|
//! | ≥ 85 | Strong Buy |
//! | ≥ 70 | Buy |
//! | ≥ 55 | Hold |
//! | ≥ 40 | Caution |
//! | < 40 | Pass |
//!
//! Colours and icons for tiers belong to the presentation layer.

mod engine;
mod recommendation;
mod tiers;

pub use engine::{CoreMetric, ScoreCard, ScoredMetric, ScoringEngine, ScoringWeights};
pub use recommendation::InvestmentRecommendation;
pub use tiers::{score_metric, MetricDirection, MetricScore};
