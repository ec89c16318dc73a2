use std::cell::RefCell;

use futures::executor::block_on;
use schema::CreditHistory;

use super::*;

/// In-memory transport that records every request and replays one canned answer.
struct FakeTransport {
    reply: Result<String, TransportError>,
    calls: RefCell<Vec<(String, String)>>,
}

impl FakeTransport {
    fn replying(body: &str) -> Self {
        Self { reply: Ok(body.to_owned()), calls: RefCell::new(Vec::new()) }
    }

    fn failing(detail: &str) -> Self {
        Self { reply: Err(TransportError::Request(detail.to_owned())), calls: RefCell::new(Vec::new()) }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl PredictTransport for FakeTransport {
    async fn post_json(&self, path: &str, body: &str) -> Result<String, TransportError> {
        self.calls.borrow_mut().push((path.to_owned(), body.to_owned()));
        self.reply.clone()
    }
}

fn valid_record() -> ApplicationRecord {
    ApplicationRecord {
        gender: Some("Male".to_owned()),
        married: Some("Yes".to_owned()),
        dependents: Some("0".to_owned()),
        education: Some("Graduate".to_owned()),
        employment_type: Some("Salaried".to_owned()),
        domain: Some("IT".to_owned()),
        years_of_experience: 5.0,
        applicant_income: 60000.0,
        coapplicant_income: 0.0,
        loan_amount: 1_000_000.0,
        loan_amount_term: 360,
        interest_rate: 8.5,
        property_area: Some("Urban".to_owned()),
        credit_history: CreditHistory::Value(1),
    }
}

const APPROVED_REPLY: &str =
    r#"{"result":"Approved","reasons":["Good credit history"],"improvements":["Maintain credit score"]}"#;

// =============================================================
// guard
// =============================================================

#[test]
fn guard_accepts_term_and_credit_history() {
    assert!(guard(&valid_record()).is_ok());
}

#[test]
fn guard_rejects_zero_term() {
    let record = ApplicationRecord { loan_amount_term: 0, ..valid_record() };
    assert!(matches!(guard(&record), Err(SubmitError::Guard)));
}

#[test]
fn guard_rejects_unset_or_invalid_credit_history() {
    for credit_history in [CreditHistory::Unset, CreditHistory::Invalid] {
        let record = ApplicationRecord { credit_history, ..valid_record() };
        assert!(matches!(guard(&record), Err(SubmitError::Guard)));
    }
}

#[test]
fn guard_error_displays_the_alert_text() {
    assert_eq!(SubmitError::Guard.to_string(), GUARD_ALERT);
}

#[test]
fn guard_accepts_explicit_zero_credit_history() {
    let record = ApplicationRecord { credit_history: CreditHistory::Value(0), ..valid_record() };
    assert!(guard(&record).is_ok());
}

// =============================================================
// submit
// =============================================================

#[test]
fn guard_failure_never_reaches_the_network() {
    let transport = FakeTransport::replying(APPROVED_REPLY);
    let record = ApplicationRecord { credit_history: CreditHistory::Unset, ..valid_record() };
    let err = block_on(submit(&transport, "/predict", &record)).expect_err("guard");
    assert!(err.is_guard());
    assert_eq!(err.user_message(), GUARD_ALERT);
    assert_eq!(transport.call_count(), 0);

    let record = ApplicationRecord { loan_amount_term: 0, ..valid_record() };
    assert!(block_on(submit(&transport, "/predict", &record)).is_err());
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn approved_reply_sends_one_post_with_normalized_body() {
    let transport = FakeTransport::replying(APPROVED_REPLY);
    let verdict = block_on(submit(&transport, "/predict", &valid_record())).expect("verdict");
    assert_eq!(verdict.result, "Approved");
    assert_eq!(verdict.reasons, vec!["Good credit history"]);
    assert_eq!(verdict.improvements, vec!["Maintain credit score"]);

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (path, body) = &calls[0];
    assert_eq!(path, "/predict");
    let json: serde_json::Value = serde_json::from_str(body).expect("json body");
    assert_eq!(json["Credit_History"], serde_json::json!(1));
    assert!(json["Credit_History"].is_i64());
    assert_eq!(json["Loan_Amount_Term"], serde_json::json!(360));
}

#[test]
fn domain_error_is_shown_verbatim() {
    let transport = FakeTransport::replying(r#"{"error":"model unavailable"}"#);
    let err = block_on(submit(&transport, "/predict", &valid_record())).expect_err("domain error");
    assert!(matches!(&err, SubmitError::Domain(m) if m == "model unavailable"));
    assert_eq!(err.user_message(), "Error: model unavailable");
    assert!(!err.is_guard());
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn transport_failure_carries_detail() {
    let transport = FakeTransport::failing("TypeError: Failed to fetch");
    let err = block_on(submit(&transport, "/predict", &valid_record())).expect_err("transport");
    assert_eq!(err.user_message(), "Server error: TypeError: Failed to fetch");
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn non_json_reply_is_a_server_error() {
    let transport = FakeTransport::replying("<!doctype html><title>502</title>");
    let err = block_on(submit(&transport, "/predict", &valid_record())).expect_err("decode");
    assert!(matches!(err, SubmitError::Decode(_)));
    assert!(err.user_message().starts_with("Server error: invalid reply body"));
}

#[test]
fn submit_uses_the_given_path() {
    let transport = FakeTransport::replying(APPROVED_REPLY);
    block_on(submit(&transport, "/api/v2/predict", &valid_record())).expect("verdict");
    assert_eq!(transport.calls.borrow()[0].0, "/api/v2/predict");
}
