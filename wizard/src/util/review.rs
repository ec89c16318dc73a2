//! Confirmation summary rows for the review step.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use schema::{ApplicationRecord, CreditHistory};

use super::money::{emi_to_income_percent, format_inr, monthly_emi};

pub const PLACEHOLDER: &str = "-";

/// One labeled line of the summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: String,
}

fn row(label: &'static str, value: String) -> ReviewRow {
    ReviewRow { label, value }
}

fn or_placeholder(value: Option<&String>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_owned(), Clone::clone)
}

/// Project a record into summary rows, followed by an affordability preview.
#[must_use]
pub fn review_rows(record: &ApplicationRecord) -> Vec<ReviewRow> {
    let term = if record.loan_amount_term == 0 {
        PLACEHOLDER.to_owned()
    } else {
        record.loan_amount_term.to_string()
    };
    let credit = match record.credit_history {
        CreditHistory::Value(value) => value.to_string(),
        CreditHistory::Unset | CreditHistory::Invalid => PLACEHOLDER.to_owned(),
    };
    let emi = monthly_emi(record.loan_amount, record.interest_rate, record.loan_amount_term);
    let ratio = emi_to_income_percent(emi, record.total_income());

    vec![
        row("Gender", or_placeholder(record.gender.as_ref())),
        row("Married", or_placeholder(record.married.as_ref())),
        row("Dependents", or_placeholder(record.dependents.as_ref())),
        row("Education", or_placeholder(record.education.as_ref())),
        row("Employment Type", or_placeholder(record.employment_type.as_ref())),
        row("Domain", or_placeholder(record.domain.as_ref())),
        row("Experience", format!("{:.1} years", record.years_of_experience)),
        row("Applicant Income", format_inr(record.applicant_income)),
        row("Co-applicant Income", format_inr(record.coapplicant_income)),
        row("Loan Amount", format_inr(record.loan_amount)),
        row("Loan Term", format!("{term} months")),
        row("Interest Rate", format!("{}%", record.interest_rate)),
        row("Property Area", or_placeholder(record.property_area.as_ref())),
        row("Credit History", credit),
        row("Estimated EMI", format_inr(emi.round())),
        row("EMI / Income", format!("{ratio:.1}%")),
    ]
}
