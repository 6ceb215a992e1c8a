//! Sensitivity and stress scenarios.
//!
//! This module provides:
//! - `presets`: The six fixed single-variable perturbations
//! - `sensitivity`: Evaluating a preset against the base case
//! - `stress`: The combined adverse scenario and cash flow boundaries

pub mod presets;
pub mod sensitivity;
pub mod stress;

pub use presets::{SensitivityKind, SensitivityPreset};
pub use sensitivity::{base_exit_cap_rate, evaluate_preset, SensitivityResult};
pub use stress::{stress_test, worst_case_inputs, StressTestResult};
