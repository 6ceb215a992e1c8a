//! Recommendation bands over the overall score.

use std::fmt;

/// Investment recommendation, ordered `Pass < Caution < Hold < Buy < StrongBuy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InvestmentRecommendation {
    /// Walk away
    Pass,
    /// Proceed only with renegotiation
    Caution,
    /// Marginal; keep watching
    Hold,
    /// Clears most targets
    Buy,
    /// Clears every target with room to spare
    StrongBuy,
}

impl InvestmentRecommendation {
    /// Minimum overall score for each band, highest band first.
    pub const BANDS: [(f64, InvestmentRecommendation); 4] = [
        (85.0, InvestmentRecommendation::StrongBuy),
        (70.0, InvestmentRecommendation::Buy),
        (55.0, InvestmentRecommendation::Hold),
        (40.0, InvestmentRecommendation::Caution),
    ];

    /// Map an overall score in `[0, 100]` to its band.
    ///
    /// # Examples
    /// ```
    /// use deal_models::InvestmentRecommendation;
    ///
    /// assert_eq!(InvestmentRecommendation::from_score(91.5), InvestmentRecommendation::StrongBuy);
    /// assert_eq!(InvestmentRecommendation::from_score(70.0), InvestmentRecommendation::Buy);
    /// assert_eq!(InvestmentRecommendation::from_score(39.9), InvestmentRecommendation::Pass);
    /// ```
    pub fn from_score(score: f64) -> Self {
        Self::BANDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, band)| *band)
            .unwrap_or(InvestmentRecommendation::Pass)
    }

    /// Position in the ordering, 0 for `Pass`.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Pass => 0,
            Self::Caution => 1,
            Self::Hold => 2,
            Self::Buy => 3,
            Self::StrongBuy => 4,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Caution => "Caution",
            Self::Hold => "Hold",
            Self::Buy => "Buy",
            Self::StrongBuy => "Strong Buy",
        }
    }
}

impl fmt::Display for InvestmentRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
