//! Preset single-variable sensitivity scenarios.
//!
//! Six fixed perturbations of a deal:
//! - Rent ±10%
//! - Interest rate ±100bp (the downward shift floors at zero)
//! - Exit cap rate ±50bp

use deal_core::types::{FinancingTerms, PropertyInputs};

/// Relative rent shock.
const RENT_SHIFT: f64 = 0.10;
/// Absolute interest rate shock.
const RATE_SHIFT: f64 = 0.01;
/// Absolute exit cap rate shock.
const EXIT_CAP_SHIFT: f64 = 0.005;

/// Which input a preset perturbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SensitivityKind {
    /// Scheduled rent
    Rent,
    /// Loan interest rate
    InterestRate,
    /// Exit cap rate; moves the valuation, not the cash flow
    ExitCap,
}

/// Types of preset sensitivity scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SensitivityPreset {
    /// Rent +10%
    RentUp10Pct,
    /// Rent -10%
    RentDown10Pct,
    /// Interest rate +100bp
    RateUp100bp,
    /// Interest rate -100bp, floored at zero
    RateDown100bp,
    /// Exit cap rate +50bp
    ExitCapUp50bp,
    /// Exit cap rate -50bp
    ExitCapDown50bp,
}

impl SensitivityPreset {
    /// Every preset, in reporting order.
    pub const ALL: [SensitivityPreset; 6] = [
        Self::RentUp10Pct,
        Self::RentDown10Pct,
        Self::RateUp100bp,
        Self::RateDown100bp,
        Self::ExitCapUp50bp,
        Self::ExitCapDown50bp,
    ];

    /// Presets that re-run the financial model.
    pub fn cash_flow_presets() -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|p| p.kind() != SensitivityKind::ExitCap)
            .collect()
    }

    /// Presets that only move the valuation.
    pub fn valuation_presets() -> Vec<Self> {
        vec![Self::ExitCapUp50bp, Self::ExitCapDown50bp]
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RentUp10Pct => "Rent +10%",
            Self::RentDown10Pct => "Rent -10%",
            Self::RateUp100bp => "Rate +100bp",
            Self::RateDown100bp => "Rate -100bp",
            Self::ExitCapUp50bp => "Exit Cap +50bp",
            Self::ExitCapDown50bp => "Exit Cap -50bp",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RentUp10Pct => "Scheduled rent increases 10%",
            Self::RentDown10Pct => "Scheduled rent decreases 10%",
            Self::RateUp100bp => "Loan interest rate +100 basis points",
            Self::RateDown100bp => "Loan interest rate -100 basis points, not below zero",
            Self::ExitCapUp50bp => "Exit cap rate +50 basis points",
            Self::ExitCapDown50bp => "Exit cap rate -50 basis points",
        }
    }

    /// Which input is perturbed.
    pub fn kind(&self) -> SensitivityKind {
        match self {
            Self::RentUp10Pct | Self::RentDown10Pct => SensitivityKind::Rent,
            Self::RateUp100bp | Self::RateDown100bp => SensitivityKind::InterestRate,
            Self::ExitCapUp50bp | Self::ExitCapDown50bp => SensitivityKind::ExitCap,
        }
    }

    /// Apply the shock to the model inputs.
    ///
    /// Exit cap presets leave both inputs unchanged.
    pub fn apply(
        &self,
        property: &PropertyInputs,
        financing: &FinancingTerms,
    ) -> (PropertyInputs, FinancingTerms) {
        match self {
            Self::RentUp10Pct => (property.with_rent_scaled(1.0 + RENT_SHIFT), financing.clone()),
            Self::RentDown10Pct => (property.with_rent_scaled(1.0 - RENT_SHIFT), financing.clone()),
            Self::RateUp100bp => (
                property.clone(),
                financing.with_interest_rate(financing.interest_rate + RATE_SHIFT),
            ),
            Self::RateDown100bp => (
                property.clone(),
                financing.with_interest_rate((financing.interest_rate - RATE_SHIFT).max(0.0)),
            ),
            Self::ExitCapUp50bp | Self::ExitCapDown50bp => (property.clone(), financing.clone()),
        }
    }

    /// Shift applied to the exit cap rate (zero for cash flow presets).
    pub fn exit_cap_shift(&self) -> f64 {
        match self {
            Self::ExitCapUp50bp => EXIT_CAP_SHIFT,
            Self::ExitCapDown50bp => -EXIT_CAP_SHIFT,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_partition_by_kind() {
        let cash_flow = SensitivityPreset::cash_flow_presets();
        let valuation = SensitivityPreset::valuation_presets();
        assert_eq!(cash_flow.len(), 4);
        assert_eq!(valuation.len(), 2);
        assert!(valuation
            .iter()
            .all(|p| p.kind() == SensitivityKind::ExitCap && p.exit_cap_shift() != 0.0));
        assert!(cash_flow.iter().all(|p| p.exit_cap_shift() == 0.0));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = SensitivityPreset::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
        assert!(SensitivityPreset::ALL
            .iter()
            .all(|p| !p.description().is_empty()));
    }

    #[test]
    fn test_rent_shocks() {
        let property = PropertyInputs {
            monthly_rent_per_unit: 2_000.0,
            unit_count: 3,
            ..Default::default()
        };
        let financing = FinancingTerms::default();
        let (up, _) = SensitivityPreset::RentUp10Pct.apply(&property, &financing);
        let (down, _) = SensitivityPreset::RentDown10Pct.apply(&property, &financing);
        assert_relative_eq!(up.total_monthly_rent(), 6_600.0, epsilon = 1e-9);
        assert_relative_eq!(down.total_monthly_rent(), 5_400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rate_shocks_floor_at_zero() {
        let property = PropertyInputs::default();
        let low_rate = FinancingTerms::from_ltv(0.75, 0.004, 30);

        let (_, up) = SensitivityPreset::RateUp100bp.apply(&property, &low_rate);
        let (_, down) = SensitivityPreset::RateDown100bp.apply(&property, &low_rate);
        assert_relative_eq!(up.interest_rate, 0.014, epsilon = 1e-12);
        assert_eq!(down.interest_rate, 0.0);
    }

    #[test]
    fn test_exit_cap_presets_leave_inputs_alone() {
        let property = PropertyInputs {
            monthly_rent_per_unit: 1_000.0,
            ..Default::default()
        };
        let financing = FinancingTerms::default();
        for preset in SensitivityPreset::valuation_presets() {
            let (p, f) = preset.apply(&property, &financing);
            assert_eq!(p, property);
            assert_eq!(f, financing);
        }
    }
}
