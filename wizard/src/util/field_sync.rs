//! Slider/text pair synchronization.
//!
//! A pair is one logical quantity shown three ways: a range slider, an
//! optional free-text box and a display label. An edit to either control
//! produces a [`PairUpdate`] carrying the new state of all three. Nothing
//! here rejects input; the text box is sanitized to digits instead.

#[cfg(test)]
#[path = "field_sync_test.rs"]
mod field_sync_test;

use super::fields::{LabelStyle, PairId};
use super::money::{format_inr, plain_number};

/// Longest digit run the text box keeps. Every integer of this length is
/// exact as an `f64`, so the label always matches the typed text.
pub const MAX_TEXT_DIGITS: usize = 15;

/// New values for every control of a pair after one edit.
#[derive(Clone, Debug, PartialEq)]
pub struct PairUpdate {
    /// Slider position, clamped to the slider's range.
    pub slider: f64,
    /// Text box content, for pairs that have one.
    pub text: Option<String>,
    /// Display label text.
    pub label: String,
    /// Value written to the pair's named form field.
    pub field_value: String,
}

/// Keep only ASCII digits.
#[must_use]
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Display label for a pair value.
#[must_use]
pub fn display_label(pair: PairId, value: f64) -> String {
    match pair.label_style() {
        LabelStyle::Years => format!("{value:.1} years"),
        LabelStyle::Rupees => format_inr(value),
        LabelStyle::Percent => format!("{value:.1}%"),
    }
}

/// The slider moved to `raw`.
#[must_use]
pub fn from_slider(pair: PairId, raw: &str) -> PairUpdate {
    let range = pair.range();
    let slider = range.clamp(raw.trim().parse::<f64>().unwrap_or(range.min));
    let text = plain_number(slider);
    PairUpdate {
        slider,
        text: pair.has_text().then(|| text.clone()),
        label: display_label(pair, slider),
        field_value: text,
    }
}

/// The text box was edited to `raw`.
///
/// Non-digits are stripped, the rest is cut to [`MAX_TEXT_DIGITS`] and an
/// empty result becomes `0`. The slider is clamped to its range, but the text
/// and label keep the typed amount.
#[must_use]
pub fn from_text(pair: PairId, raw: &str) -> PairUpdate {
    let mut digits = sanitize_digits(raw);
    digits.truncate(MAX_TEXT_DIGITS);
    if digits.is_empty() {
        digits.push('0');
    }
    let value = digits.parse::<f64>().unwrap_or(0.0);
    PairUpdate {
        slider: pair.range().clamp(value),
        text: Some(digits.clone()),
        label: display_label(pair, value),
        field_value: digits,
    }
}

/// Initial state of a pair, as rendered on first load.
#[must_use]
pub fn initial(pair: PairId) -> PairUpdate {
    from_slider(pair, &plain_number(pair.range().default))
}
