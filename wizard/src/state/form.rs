//! Live form state: named control values plus slider/text pairs.
//!
//! DESIGN
//! ======
//! This is the single source of truth for applicant input. Nothing derived
//! from it (the application record, review rows) is stored; callers collect
//! a fresh record from the current state whenever they need one.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::util::field_sync::{self, PairUpdate};
use crate::util::fields::PairId;

/// Current contents of one slider/text/label trio.
#[derive(Clone, Debug, PartialEq)]
pub struct PairControl {
    pub slider: f64,
    pub text: Option<String>,
    pub label: String,
}

impl PairControl {
    /// Raw value the control would submit: the text box if present, else the slider.
    #[must_use]
    pub fn raw_value(&self) -> String {
        self.text.clone().unwrap_or_else(|| crate::util::money::plain_number(self.slider))
    }
}

/// Form controls keyed by their `name`, like a browser `FormData`.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    values: BTreeMap<String, String>,
    pairs: [PairControl; 4],
}

impl Default for FormState {
    fn default() -> Self {
        let mut state = Self {
            values: BTreeMap::new(),
            pairs: PairId::ALL.map(|_| PairControl { slider: 0.0, text: None, label: String::new() }),
        };
        for pair in PairId::ALL {
            state.apply_pair(pair, field_sync::initial(pair));
        }
        state
    }
}

impl FormState {
    /// Value of a named control, if it has one.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Set a named control (select, plain input).
    pub fn set_value(&mut self, name: &str, raw: &str) {
        self.values.insert(name.to_owned(), raw.to_owned());
    }

    /// Drop a named control's value, as if the control were absent.
    pub fn remove_value(&mut self, name: &str) {
        self.values.remove(name);
    }

    #[must_use]
    pub fn pair(&self, pair: PairId) -> &PairControl {
        &self.pairs[pair.index()]
    }

    /// The user dragged a pair's slider.
    pub fn slider_input(&mut self, pair: PairId, raw: &str) {
        self.apply_pair(pair, field_sync::from_slider(pair, raw));
    }

    /// The user typed into a pair's text box.
    pub fn text_input(&mut self, pair: PairId, raw: &str) {
        if !pair.has_text() {
            return;
        }
        self.apply_pair(pair, field_sync::from_text(pair, raw));
    }

    fn apply_pair(&mut self, pair: PairId, update: PairUpdate) {
        let control = &mut self.pairs[pair.index()];
        control.slider = update.slider;
        control.text = update.text;
        control.label = update.label;
        self.values.insert(pair.field_name().to_owned(), update.field_value);
    }
}
