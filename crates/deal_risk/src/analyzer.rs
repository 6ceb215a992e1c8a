//! Risk buffers for a single deal.

use deal_core::math::solvers::{BoundarySolver, SolverConfig};
use deal_core::types::{FinancingTerms, PropertyInputs, Ratio};
use deal_models::{DealEconomics, FinancialModel};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::break_even::break_even_occupancy;
use crate::scenarios::{evaluate_preset, stress_test, SensitivityPreset, SensitivityResult, StressTestResult};

/// Break-even occupancy, sensitivity results and stress test for one deal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskBuffers {
    /// Occupancy needed to cover fixed costs and debt service
    pub break_even_occupancy: Ratio,
    /// One result per preset, in [`SensitivityPreset::ALL`] order
    pub sensitivity_analysis: Vec<SensitivityResult>,
    /// Combined adverse scenario and boundaries
    pub stress_test_results: StressTestResult,
}

impl RiskBuffers {
    /// Sensitivity result for `preset`, if it was run.
    pub fn sensitivity(&self, preset: SensitivityPreset) -> Option<&SensitivityResult> {
        self.sensitivity_analysis.iter().find(|r| r.preset == preset)
    }

    /// The cash flow scenario with the largest drop from base.
    pub fn worst_sensitivity(&self) -> Option<&SensitivityResult> {
        self.sensitivity_analysis.iter().min_by(|a, b| {
            a.delta_from_base
                .partial_cmp(&b.delta_from_base)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// Re-runs the financial model under perturbations of one deal.
///
/// # Examples
///
/// ```
/// use deal_core::types::{FinancingTerms, PropertyInputs};
/// use deal_models::FinancialModel;
/// use deal_risk::{RiskAnalyzer, SensitivityPreset};
///
/// let property = PropertyInputs {
///     purchase_price: 300_000.0,
///     unit_count: 2,
///     monthly_rent_per_unit: 1_800.0,
///     annual_taxes: 3_600.0,
///     annual_insurance: 1_200.0,
///     ..Default::default()
/// };
/// let financing = FinancingTerms::from_ltv(0.75, 0.065, 30);
///
/// let model = FinancialModel::new(2026);
/// let base = model.compute_deal_economics(&property, &financing);
/// let buffers = RiskAnalyzer::new(model).risk_buffers(&property, &financing, &base);
///
/// assert_eq!(buffers.sensitivity_analysis.len(), 6);
/// let rent_up = buffers.sensitivity(SensitivityPreset::RentUp10Pct).unwrap();
/// assert!(rent_up.cash_flow >= base.annual_cash_flow);
/// ```
#[derive(Debug, Clone)]
pub struct RiskAnalyzer {
    model: FinancialModel,
    solver: BoundarySolver<f64>,
}

impl RiskAnalyzer {
    /// Create an analyzer with the default 1bp boundary tolerance.
    pub fn new(model: FinancialModel) -> Self {
        Self {
            model,
            solver: BoundarySolver::with_defaults(),
        }
    }

    /// Use a different boundary solver configuration.
    pub fn with_solver_config(mut self, config: SolverConfig<f64>) -> Self {
        self.solver = BoundarySolver::new(config);
        self
    }

    /// The financial model in use.
    pub fn model(&self) -> &FinancialModel {
        &self.model
    }

    /// Boundary solver configuration.
    pub fn solver_config(&self) -> &SolverConfig<f64> {
        self.solver.config()
    }

    /// Run every preset in [`SensitivityPreset::ALL`] against `base`.
    pub fn sensitivity_analysis(
        &self,
        property: &PropertyInputs,
        financing: &FinancingTerms,
        base: &DealEconomics,
    ) -> Vec<SensitivityResult> {
        self.run_presets(&SensitivityPreset::ALL, property, financing, base)
    }

    /// Run the given presets against `base`, preserving order.
    #[cfg(not(feature = "parallel"))]
    pub fn run_presets(
        &self,
        presets: &[SensitivityPreset],
        property: &PropertyInputs,
        financing: &FinancingTerms,
        base: &DealEconomics,
    ) -> Vec<SensitivityResult> {
        presets
            .iter()
            .map(|preset| evaluate_preset(&self.model, *preset, property, financing, base))
            .collect()
    }

    /// Run the given presets against `base` on the rayon pool, preserving order.
    #[cfg(feature = "parallel")]
    pub fn run_presets(
        &self,
        presets: &[SensitivityPreset],
        property: &PropertyInputs,
        financing: &FinancingTerms,
        base: &DealEconomics,
    ) -> Vec<SensitivityResult> {
        presets
            .par_iter()
            .map(|preset| evaluate_preset(&self.model, *preset, property, financing, base))
            .collect()
    }

    /// Worst case cash flow and the vacancy / rate boundaries.
    pub fn stress_test(&self, property: &PropertyInputs, financing: &FinancingTerms) -> StressTestResult {
        stress_test(&self.model, &self.solver, property, financing)
    }

    /// All risk buffers for a deal whose base economics are `base`.
    pub fn risk_buffers(
        &self,
        property: &PropertyInputs,
        financing: &FinancingTerms,
        base: &DealEconomics,
    ) -> RiskBuffers {
        RiskBuffers {
            break_even_occupancy: break_even_occupancy(base),
            sensitivity_analysis: self.sensitivity_analysis(property, financing, base),
            stress_test_results: self.stress_test(property, financing),
        }
    }
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::new(FinancialModel::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::SensitivityKind;

    fn duplex() -> PropertyInputs {
        PropertyInputs {
            purchase_price: 300_000.0,
            year_built: 2012,
            unit_count: 2,
            monthly_rent_per_unit: 1_800.0,
            annual_taxes: 3_600.0,
            annual_insurance: 1_200.0,
            repairs_per_unit_per_year: 600.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_sensitivity_order_matches_presets() {
        let analyzer = RiskAnalyzer::new(FinancialModel::new(2026));
        let property = duplex();
        let financing = FinancingTerms::from_ltv(0.75, 0.065, 30);
        let base = analyzer.model().compute_deal_economics(&property, &financing);

        let results = analyzer.sensitivity_analysis(&property, &financing, &base);
        let presets: Vec<_> = results.iter().map(|r| r.preset).collect();
        assert_eq!(presets, SensitivityPreset::ALL.to_vec());
        assert!(results
            .iter()
            .all(|r| r.label == r.preset.name() && r.kind == r.preset.kind()));
    }

    #[test]
    fn test_subset_of_presets() {
        let analyzer = RiskAnalyzer::new(FinancialModel::new(2026));
        let property = duplex();
        let financing = FinancingTerms::from_ltv(0.75, 0.065, 30);
        let base = analyzer.model().compute_deal_economics(&property, &financing);

        let valuation = analyzer.run_presets(
            &SensitivityPreset::valuation_presets(),
            &property,
            &financing,
            &base,
        );
        assert_eq!(valuation.len(), 2);
        assert!(valuation.iter().all(|r| r.kind == SensitivityKind::ExitCap));
    }

    #[test]
    fn test_risk_buffers_assembly() {
        let analyzer = RiskAnalyzer::new(FinancialModel::new(2026));
        let property = duplex();
        let financing = FinancingTerms::from_ltv(0.75, 0.065, 30);
        let base = analyzer.model().compute_deal_economics(&property, &financing);

        let buffers = analyzer.risk_buffers(&property, &financing, &base);
        assert_eq!(buffers.break_even_occupancy, break_even_occupancy(&base));
        assert_eq!(buffers.stress_test_results, analyzer.stress_test(&property, &financing));

        let worst = buffers.worst_sensitivity().unwrap();
        assert!(matches!(
            worst.preset,
            SensitivityPreset::RentDown10Pct | SensitivityPreset::RateUp100bp
        ));
        assert!(worst.is_loss());
    }

    #[test]
    fn test_custom_solver_config() {
        let analyzer = RiskAnalyzer::new(FinancialModel::new(2026))
            .with_solver_config(SolverConfig::high_precision());
        assert_eq!(analyzer.solver_config().tolerance, 1e-8);

        let property = duplex();
        let financing = FinancingTerms::from_ltv(0.75, 0.065, 30);
        let coarse = RiskAnalyzer::new(FinancialModel::new(2026)).stress_test(&property, &financing);
        let fine = analyzer.stress_test(&property, &financing);
        assert!((coarse.max_rate_before_negative - fine.max_rate_before_negative).abs() <= 1e-4);
        assert!(fine.max_rate_before_negative >= coarse.max_rate_before_negative);
    }
}
