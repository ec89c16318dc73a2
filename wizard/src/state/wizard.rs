//! Step state machine and result-area state.
//!
//! DESIGN
//! ======
//! The active step, field flags, pending alert, result panel and in-flight
//! flag are owned here instead of being read back from the DOM. Views derive
//! panel/marker classes from this record, so every transition is testable
//! without a rendered page.
//!
//! Scroll requests are sequence counters: a transition bumps the counter and
//! the page adapter scrolls whenever it changes.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::BTreeSet;

use schema::Verdict;

use crate::config::WizardConfig;
use crate::net::predict::SubmitError;
use crate::state::form::FormState;
use crate::util::validate::{StepValidation, validate_step};
use crate::util::verdict::{ResultView, result_view};

pub const PENDING_MESSAGE: &str = "Analyzing your application...";

/// Progress indicator state for one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepMarker {
    Completed,
    Active,
    Pending,
}

impl StepMarker {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Completed => "step-item completed",
            Self::Active => "step-item active",
            Self::Pending => "step-item",
        }
    }
}

/// Contents of the result area below the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultPanel {
    #[default]
    Hidden,
    /// A request is in flight.
    Pending,
    /// A domain or server error message.
    Failed(String),
    /// A rendered verdict.
    Ready(ResultView),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardState {
    pub current: usize,
    /// Required fields currently flagged as invalid.
    pub invalid_fields: BTreeSet<&'static str>,
    /// Blocking message waiting to be shown.
    pub alert: Option<String>,
    pub result: ResultPanel,
    /// True while a prediction request is in flight.
    pub submitting: bool,
    pub wizard_scroll_seq: u64,
    pub result_scroll_seq: u64,
    step_count: usize,
    final_input_step: usize,
    review_step: usize,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(&WizardConfig::default())
    }
}

impl WizardState {
    #[must_use]
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            current: 0,
            invalid_fields: BTreeSet::new(),
            alert: None,
            result: ResultPanel::Hidden,
            submitting: false,
            wizard_scroll_seq: 0,
            result_scroll_seq: 0,
            step_count: config.step_count,
            final_input_step: config.final_input_step,
            review_step: config.review_step,
        }
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    #[must_use]
    pub fn is_final_input_step(&self) -> bool {
        self.current == self.final_input_step
    }

    #[must_use]
    pub fn is_review_step(&self) -> bool {
        self.current == self.review_step
    }

    /// Exactly one panel is active: the current one.
    #[must_use]
    pub fn panel_active(&self, index: usize) -> bool {
        index == self.current
    }

    #[must_use]
    pub fn marker(&self, index: usize) -> StepMarker {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => StepMarker::Completed,
            std::cmp::Ordering::Equal => StepMarker::Active,
            std::cmp::Ordering::Greater => StepMarker::Pending,
        }
    }

    #[must_use]
    pub fn is_flagged(&self, field: &str) -> bool {
        self.invalid_fields.contains(field)
    }

    /// Validate the current step and move forward one step if it passes.
    /// Stays on the last step when already there.
    pub fn advance(&mut self, form: &FormState) -> bool {
        if !self.check(self.current, form) {
            return false;
        }
        self.go_to((self.current + 1).min(self.step_count.saturating_sub(1)));
        true
    }

    /// Move back one step. Never validates; stops at step 0.
    pub fn retreat(&mut self) {
        self.go_to(self.current.saturating_sub(1));
    }

    /// From the final input step, validate it and jump to the review step.
    pub fn jump_to_review(&mut self, form: &FormState) -> bool {
        if !self.is_final_input_step() || !self.check(self.final_input_step, form) {
            return false;
        }
        self.go_to(self.review_step);
        true
    }

    /// Back to a freshly loaded wizard.
    pub fn reset(&mut self) {
        let wizard_scroll_seq = self.wizard_scroll_seq;
        let result_scroll_seq = self.result_scroll_seq;
        *self = Self {
            wizard_scroll_seq,
            result_scroll_seq,
            step_count: self.step_count,
            final_input_step: self.final_input_step,
            review_step: self.review_step,
            ..Self::default()
        };
    }

    /// Toggle field flags and queue the alert from a validation outcome.
    pub fn apply_validation(&mut self, outcome: &StepValidation) {
        for field in &outcome.valid {
            self.invalid_fields.remove(field);
        }
        self.invalid_fields.extend(outcome.invalid.iter().copied());
        if let Some(alert) = outcome.alert {
            self.alert = Some(alert.to_owned());
        }
    }

    /// Queue a blocking alert.
    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Hand the pending alert to the view, clearing it.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Enter the pending state.
    ///
    /// Refused (returns false) unless the review step is showing and no
    /// request is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting || !self.is_review_step() {
            return false;
        }
        self.submitting = true;
        self.result = ResultPanel::Pending;
        self.result_scroll_seq += 1;
        true
    }

    /// Record the outcome of the in-flight request.
    ///
    /// Guard failures become an alert and leave the result area untouched.
    pub fn finish_submit(&mut self, outcome: Result<Verdict, SubmitError>) {
        self.submitting = false;
        match outcome {
            Ok(verdict) => self.result = ResultPanel::Ready(result_view(&verdict)),
            Err(err) if err.is_guard() => {
                self.result = ResultPanel::Hidden;
                self.raise_alert(err.user_message());
            }
            Err(err) => self.result = ResultPanel::Failed(err.user_message()),
        }
        self.result_scroll_seq += 1;
    }

    fn check(&mut self, step: usize, form: &FormState) -> bool {
        let outcome = validate_step(step, form);
        self.apply_validation(&outcome);
        outcome.is_ok()
    }

    fn go_to(&mut self, step: usize) {
        self.current = step;
        self.wizard_scroll_seq += 1;
    }
}
