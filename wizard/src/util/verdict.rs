//! View model for a prediction verdict.
//!
//! The verdict label is free text from the service. Styling and section
//! titles depend only on whether it reads as an approval.

#[cfg(test)]
#[path = "verdict_test.rs"]
mod verdict_test;

use schema::Verdict;

const APPROVED_MARKER: &str = "approved";
const DECLINED_MARKER: &str = "not approved";

/// Heading emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
}

impl Tone {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "text-success",
            Self::Danger => "text-danger",
        }
    }
}

/// Everything the result card shows for a verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub heading: String,
    pub tone: Tone,
    pub intro: String,
    pub reasons_title: &'static str,
    pub reasons: Vec<String>,
    pub improvements_title: &'static str,
    pub improvements: Vec<String>,
}

/// Case-insensitive approval check. A negated marker ("Not Approved") wins.
#[must_use]
pub fn is_approved(label: &str) -> bool {
    let lower = label.to_lowercase();
    lower.contains(APPROVED_MARKER) && !lower.contains(DECLINED_MARKER)
}

#[must_use]
pub fn result_view(verdict: &Verdict) -> ResultView {
    let approved = is_approved(&verdict.result);
    let (tone, reasons_title, improvements_title) = if approved {
        (Tone::Success, "Key Factors:", "Next steps:")
    } else {
        (Tone::Danger, "Model Insights (Why not approved):", "How to improve:")
    };
    ResultView {
        heading: verdict.result.clone(),
        tone,
        intro: verdict.intro.clone().unwrap_or_default(),
        reasons_title,
        reasons: verdict.reasons.clone(),
        improvements_title,
        improvements: verdict.improvements.clone(),
    }
}
