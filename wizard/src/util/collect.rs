//! Normalize live form state into an [`ApplicationRecord`].
//!
//! DESIGN
//! ======
//! Numeric fields resolve through [`NUMERIC_PRECEDENCE`]: each field lists the
//! places its raw value may come from, in order, and the first non-blank one
//! wins. Whatever is chosen is then coerced; blank, unparsable or non-finite
//! input becomes `0`. `Credit_History` is the exception and keeps its
//! unselected sentinel.

#[cfg(test)]
#[path = "collect_test.rs"]
mod collect_test;

use schema::{ApplicationRecord, CreditHistory};

use crate::state::form::FormState;
use crate::util::fields::*;

/// Where a numeric field's raw value may be read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// The named form control.
    Named,
    /// The current value of a slider/text pair.
    Paired(PairId),
}

/// Resolution order for one numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericRule {
    pub field: &'static str,
    pub sources: &'static [Source],
}

pub const NUMERIC_PRECEDENCE: &[NumericRule] = &[
    NumericRule { field: YEARS_OF_EXPERIENCE, sources: &[Source::Named, Source::Paired(PairId::Experience)] },
    NumericRule { field: APPLICANT_INCOME, sources: &[Source::Named, Source::Paired(PairId::ApplicantIncome)] },
    NumericRule { field: COAPPLICANT_INCOME, sources: &[Source::Named] },
    NumericRule { field: LOAN_AMOUNT, sources: &[Source::Named, Source::Paired(PairId::LoanAmount)] },
    NumericRule { field: LOAN_AMOUNT_TERM, sources: &[Source::Named] },
    NumericRule { field: INTEREST_RATE, sources: &[Source::Named, Source::Paired(PairId::InterestRate)] },
];

/// Build a fresh record from the current form.
#[must_use]
pub fn collect(form: &FormState) -> ApplicationRecord {
    ApplicationRecord {
        gender: categorical(form, GENDER),
        married: categorical(form, MARRIED),
        dependents: categorical(form, DEPENDENTS),
        education: categorical(form, EDUCATION),
        employment_type: categorical(form, EMPLOYMENT_TYPE),
        domain: categorical(form, DOMAIN),
        years_of_experience: parse_number(&resolve_raw(form, YEARS_OF_EXPERIENCE)),
        applicant_income: parse_number(&resolve_raw(form, APPLICANT_INCOME)),
        coapplicant_income: parse_number(&resolve_raw(form, COAPPLICANT_INCOME)),
        loan_amount: parse_number(&resolve_raw(form, LOAN_AMOUNT)),
        loan_amount_term: parse_integer(&resolve_raw(form, LOAN_AMOUNT_TERM)),
        interest_rate: parse_number(&resolve_raw(form, INTEREST_RATE)),
        property_area: categorical(form, PROPERTY_AREA),
        credit_history: CreditHistory::parse(form.value(CREDIT_HISTORY).unwrap_or_default()),
    }
}

/// The precedence rule for `field`; undeclared fields read the named control only.
#[must_use]
pub fn rule_for(field: &'static str) -> NumericRule {
    NUMERIC_PRECEDENCE
        .iter()
        .copied()
        .find(|rule| rule.field == field)
        .unwrap_or(NumericRule { field, sources: &[Source::Named] })
}

/// First non-blank raw value along the field's precedence order, or `""`.
#[must_use]
pub fn resolve_raw(form: &FormState, field: &'static str) -> String {
    rule_for(field)
        .sources
        .iter()
        .map(|source| match source {
            Source::Named => form.value(field).unwrap_or_default().to_owned(),
            Source::Paired(pair) => form.pair(*pair).raw_value(),
        })
        .find(|raw| !raw.trim().is_empty())
        .unwrap_or_default()
}

/// Float coercion: anything that is not a finite number becomes `0`.
#[must_use]
pub fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Integer coercion: decimals truncate, anything unparsable becomes `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    parse_number(trimmed).trunc() as i64
}

fn categorical(form: &FormState, name: &str) -> Option<String> {
    form.value(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
