//! Wizard configuration: prediction endpoint and step roles.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::fields::STEPS;

pub const DEFAULT_PREDICT_PATH: &str = "/predict";
pub const DEFAULT_FINAL_INPUT_STEP: usize = 2;
pub const DEFAULT_REVIEW_STEP: usize = 3;

/// Provided to components through context by the root component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Path the application record is POSTed to.
    pub predict_path: String,
    /// Step whose review button jumps straight to the summary.
    pub final_input_step: usize,
    /// Step showing the summary and the submit button.
    pub review_step: usize,
    /// Number of steps in the wizard.
    pub step_count: usize,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            predict_path: DEFAULT_PREDICT_PATH.to_owned(),
            final_input_step: DEFAULT_FINAL_INPUT_STEP,
            review_step: DEFAULT_REVIEW_STEP,
            step_count: STEPS.len(),
        }
    }
}
