//! Sensitivity results against a base case.

use deal_core::types::{FinancingTerms, PropertyInputs, Ratio};
use deal_models::financial::implied_value;
use deal_models::{DealEconomics, FinancialModel};

use super::presets::{SensitivityKind, SensitivityPreset};

/// Outcome of one preset scenario.
///
/// Cash flow figures are annual. For exit cap scenarios the cash flow,
/// cash-on-cash and DSCR equal the base case and the valuation fields carry
/// the effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityResult {
    /// Preset that produced this result
    pub preset: SensitivityPreset,
    /// Display label
    pub label: String,
    /// Perturbed input
    pub kind: SensitivityKind,
    /// Perturbed annual cash flow
    pub cash_flow: f64,
    /// Perturbed cash-on-cash return
    pub cash_on_cash: Ratio,
    /// Perturbed DSCR
    pub dscr: Ratio,
    /// Perturbed minus base annual cash flow
    pub delta_from_base: f64,
    /// NOI capitalised at the shifted exit cap rate
    pub implied_value: Option<f64>,
    /// Implied value minus the value at the unshifted exit cap rate
    pub value_delta_from_base: Option<f64>,
}

impl SensitivityResult {
    /// Whether the scenario lowers annual cash flow.
    pub fn is_loss(&self) -> bool {
        self.delta_from_base < 0.0
    }
}

/// Exit cap rate for valuation: the property's own assumption when positive,
/// otherwise the in-place cap rate.
pub fn base_exit_cap_rate(property: &PropertyInputs, base: &DealEconomics) -> Option<f64> {
    property
        .exit_cap_rate
        .filter(|rate| *rate > 0.0)
        .or_else(|| base.in_place_cap_rate.as_option())
}

/// Evaluate `preset` against the `base` economics of the same deal.
pub fn evaluate_preset(
    model: &FinancialModel,
    preset: SensitivityPreset,
    property: &PropertyInputs,
    financing: &FinancingTerms,
    base: &DealEconomics,
) -> SensitivityResult {
    match preset.kind() {
        SensitivityKind::ExitCap => {
            let exit_cap = base_exit_cap_rate(property, base);
            let base_value = exit_cap.and_then(|cap| implied_value(base.net_operating_income, cap));
            let shifted_value = exit_cap
                .and_then(|cap| implied_value(base.net_operating_income, cap + preset.exit_cap_shift()));
            SensitivityResult {
                preset,
                label: preset.name().to_string(),
                kind: preset.kind(),
                cash_flow: base.annual_cash_flow,
                cash_on_cash: base.cash_on_cash_return,
                dscr: base.dscr,
                delta_from_base: 0.0,
                implied_value: shifted_value,
                value_delta_from_base: shifted_value.zip(base_value).map(|(s, b)| s - b),
            }
        }
        SensitivityKind::Rent | SensitivityKind::InterestRate => {
            let (property, financing) = preset.apply(property, financing);
            let perturbed = model.compute_deal_economics(&property, &financing);
            SensitivityResult {
                preset,
                label: preset.name().to_string(),
                kind: preset.kind(),
                cash_flow: perturbed.annual_cash_flow,
                cash_on_cash: perturbed.cash_on_cash_return,
                dscr: perturbed.dscr,
                delta_from_base: perturbed.annual_cash_flow - base.annual_cash_flow,
                implied_value: None,
                value_delta_from_base: None,
            }
        }
    }
}
