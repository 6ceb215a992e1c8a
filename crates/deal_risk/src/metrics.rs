//! Full deal analysis.

use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
use deal_models::{DealEconomics, FinancialModel, InvestmentRecommendation, ScoredMetric, ScoringEngine};

use crate::analyzer::{RiskAnalyzer, RiskBuffers};

/// Everything computed for one deal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealMetrics {
    /// Base case income statement and returns
    pub deal_economics: DealEconomics,
    /// Break-even, sensitivity and stress results
    pub risk_buffers: RiskBuffers,
    /// Core metrics graded against the thresholds
    pub scored_metrics: Vec<ScoredMetric>,
    /// Weighted score in `[0, 100]`
    pub overall_score: f64,
    /// Band of `overall_score`
    pub recommendation: InvestmentRecommendation,
}

/// Runs the financial model, scoring and risk analysis together.
#[derive(Debug, Clone)]
pub struct DealAnalyzer {
    risk: RiskAnalyzer,
    scoring: ScoringEngine,
}

impl DealAnalyzer {
    /// Analyzer with equal scoring weights.
    pub fn new(model: FinancialModel) -> Self {
        Self {
            risk: RiskAnalyzer::new(model),
            scoring: ScoringEngine::default(),
        }
    }

    /// Use a different scoring engine.
    pub fn with_scoring(mut self, scoring: ScoringEngine) -> Self {
        self.scoring = scoring;
        self
    }

    /// Use a different risk analyzer.
    pub fn with_risk_analyzer(mut self, risk: RiskAnalyzer) -> Self {
        self.risk = risk;
        self
    }

    /// The financial model in use.
    pub fn model(&self) -> &FinancialModel {
        self.risk.model()
    }

    /// Analyse one deal.
    pub fn analyse(
        &self,
        property: &PropertyInputs,
        financing: &FinancingTerms,
        thresholds: &Thresholds,
    ) -> DealMetrics {
        let span = tracing::debug_span!("analyse_deal", units = property.unit_count);
        let _enter = span.enter();

        let deal_economics = self.model().compute_deal_economics(property, financing);
        let risk_buffers = self.risk.risk_buffers(property, financing, &deal_economics);
        let card = self.scoring.score_deal(&deal_economics, thresholds);

        tracing::debug!(
            noi = deal_economics.net_operating_income,
            annual_cash_flow = deal_economics.annual_cash_flow,
            overall_score = card.overall_score,
            recommendation = %card.recommendation,
            "deal analysed"
        );

        DealMetrics {
            deal_economics,
            risk_buffers,
            scored_metrics: card.scored_metrics,
            overall_score: card.overall_score,
            recommendation: card.recommendation,
        }
    }
}

impl Default for DealAnalyzer {
    fn default() -> Self {
        Self::new(FinancialModel::default())
    }
}

/// Analyse a deal with the current-year model and equal scoring weights.
///
/// # Examples
///
/// ```
/// use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
/// use deal_risk::analyse_deal;
///
/// let property = PropertyInputs {
///     purchase_price: 250_000.0,
///     unit_count: 3,
///     monthly_rent_per_unit: 1_400.0,
///     annual_taxes: 3_000.0,
///     annual_insurance: 1_500.0,
///     ..Default::default()
/// };
/// let metrics = analyse_deal(
///     &property,
///     &FinancingTerms::from_ltv(0.75, 0.065, 30),
///     &Thresholds::default(),
/// );
/// assert!((0.0..=100.0).contains(&metrics.overall_score));
/// assert_eq!(metrics.scored_metrics.len(), 4);
/// ```
pub fn analyse_deal(
    property: &PropertyInputs,
    financing: &FinancingTerms,
    thresholds: &Thresholds,
) -> DealMetrics {
    DealAnalyzer::default().analyse(property, financing, thresholds)
}
