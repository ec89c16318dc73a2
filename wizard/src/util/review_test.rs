use super::*;

fn value_of<'a>(rows: &'a [ReviewRow], label: &str) -> &'a str {
    rows.iter()
        .find(|r| r.label == label)
        .map(|r| r.value.as_str())
        .unwrap_or_else(|| panic!("missing row {label}"))
}

fn sample() -> ApplicationRecord {
    ApplicationRecord {
        gender: Some("Female".to_owned()),
        married: Some("No".to_owned()),
        dependents: Some("0".to_owned()),
        education: Some("Graduate".to_owned()),
        employment_type: Some("Salaried".to_owned()),
        domain: Some("Finance".to_owned()),
        years_of_experience: 3.0,
        applicant_income: 50000.0,
        coapplicant_income: 0.0,
        loan_amount: 1_000_000.0,
        loan_amount_term: 360,
        interest_rate: 8.5,
        property_area: Some("Urban".to_owned()),
        credit_history: CreditHistory::Value(1),
    }
}

#[test]
fn applicant_income_uses_indian_grouping() {
    let rows = review_rows(&sample());
    assert_eq!(value_of(&rows, "Applicant Income"), "₹50,000");
}

#[test]
fn rows_follow_record_order() {
    let labels: Vec<&str> = review_rows(&sample()).iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![
            "Gender",
            "Married",
            "Dependents",
            "Education",
            "Employment Type",
            "Domain",
            "Experience",
            "Applicant Income",
            "Co-applicant Income",
            "Loan Amount",
            "Loan Term",
            "Interest Rate",
            "Property Area",
            "Credit History",
            "Estimated EMI",
            "EMI / Income",
        ]
    );
}

#[test]
fn units_and_suffixes() {
    let rows = review_rows(&sample());
    assert_eq!(value_of(&rows, "Experience"), "3.0 years");
    assert_eq!(value_of(&rows, "Loan Amount"), "₹10,00,000");
    assert_eq!(value_of(&rows, "Loan Term"), "360 months");
    assert_eq!(value_of(&rows, "Interest Rate"), "8.5%");
    assert_eq!(value_of(&rows, "Credit History"), "1");
}

#[test]
fn missing_values_render_placeholder() {
    let rows = review_rows(&ApplicationRecord::default());
    assert_eq!(value_of(&rows, "Gender"), "-");
    assert_eq!(value_of(&rows, "Property Area"), "-");
    assert_eq!(value_of(&rows, "Loan Term"), "- months");
    assert_eq!(value_of(&rows, "Credit History"), "-");
    assert_eq!(value_of(&rows, "Applicant Income"), "₹0");
    assert_eq!(value_of(&rows, "Experience"), "0.0 years");
    assert_eq!(value_of(&rows, "Interest Rate"), "0%");
}

#[test]
fn zero_credit_history_is_shown() {
    let record = ApplicationRecord { credit_history: CreditHistory::Value(0), ..sample() };
    assert_eq!(value_of(&review_rows(&record), "Credit History"), "0");
}

#[test]
fn affordability_preview_uses_combined_income() {
    let rows = review_rows(&sample());
    assert_eq!(value_of(&rows, "Estimated EMI"), "₹7,689");
    assert_eq!(value_of(&rows, "EMI / Income"), "15.4%");
}

#[test]
fn affordability_preview_is_zero_without_term() {
    let record = ApplicationRecord { loan_amount_term: 0, ..sample() };
    let rows = review_rows(&record);
    assert_eq!(value_of(&rows, "Estimated EMI"), "₹0");
    assert_eq!(value_of(&rows, "EMI / Income"), "0.0%");
}
