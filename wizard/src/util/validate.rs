//! Per-step required-field validation.
//!
//! Validation only reads the form. Applying the outcome (toggling field flags,
//! raising the alert) is left to `WizardState::apply_validation`.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::state::form::FormState;
use crate::util::fields;

/// Outcome of checking one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepValidation {
    /// Required fields that passed; their flags are cleared.
    pub valid: Vec<&'static str>,
    /// Required fields that are empty or whitespace; their flags are set.
    pub invalid: Vec<&'static str>,
    /// Blocking message for a missing explicit selection.
    pub alert: Option<&'static str>,
}

impl StepValidation {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.invalid.is_empty() && self.alert.is_none()
    }
}

/// Check every required field of `step`, plus the step's explicit-selection
/// rule if it has one. Unknown step indices have nothing to check.
#[must_use]
pub fn validate_step(step: usize, form: &FormState) -> StepValidation {
    let mut outcome = StepValidation::default();
    let Some(spec) = fields::step(step) else {
        return outcome;
    };
    for field in spec.fields.iter().filter(|f| f.required) {
        if is_filled(form.value(field.name)) {
            outcome.valid.push(field.name);
        } else {
            outcome.invalid.push(field.name);
        }
    }
    if let Some(rule) = spec.explicit_selection {
        if !is_filled(form.value(rule.field)) {
            outcome.alert = Some(rule.alert);
        }
    }
    outcome
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
