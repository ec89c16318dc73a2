//! Rupee formatting and repayment math.
//!
//! Amounts are grouped the Indian way: the last three digits, then pairs
//! (`12,34,567`). Up to three fraction digits are kept and trailing zeros
//! dropped.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format an amount as `₹` plus Indian digit grouping.
#[must_use]
pub fn format_inr(value: f64) -> String {
    format!("₹{}", group_amount(value))
}

/// Indian-grouped number without the currency symbol.
#[must_use]
pub fn group_amount(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let text = format!("{rounded:.3}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && rounded > 0.0 { "-" } else { "" };
    let grouped = group_indian(int_part);
    if frac.is_empty() { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{frac}") }
}

/// Insert separators into a run of ASCII digits: three, then twos.
#[must_use]
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Plain number text as a form control would hold it (`50000`, `8.5`).
#[must_use]
pub fn plain_number(value: f64) -> String {
    if value.is_finite() { format!("{value}") } else { "0".to_owned() }
}

/// Equated monthly instalment for `principal` at `annual_rate` percent over
/// `months`. Zero when either the rate or the term is zero.
#[must_use]
pub fn monthly_emi(principal: f64, annual_rate: f64, months: i64) -> f64 {
    let r = annual_rate / (12.0 * 100.0);
    if r == 0.0 || months <= 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let growth = (1.0 + r).powf(months as f64);
    principal * r * growth / (growth - 1.0)
}

/// EMI as a percentage of monthly income; income below 1 counts as 1.
#[must_use]
pub fn emi_to_income_percent(emi: f64, total_income: f64) -> f64 {
    emi / total_income.max(1.0) * 100.0
}
