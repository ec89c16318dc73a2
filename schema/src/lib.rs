//! Shared wire model for the loan prediction endpoint.
//!
//! This crate owns the JSON shapes exchanged between the wizard and the
//! prediction service: the [`ApplicationRecord`] request body and the reply
//! decoded by [`decode_reply`]. Field names on the wire are the service's
//! column names (`ApplicantIncome`, `Credit_History`, ...), so every key is
//! renamed explicitly rather than derived from the Rust field name.


use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Error returned by [`decode_reply`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The reply body is not valid JSON or has the wrong shape.
    #[error("invalid reply body: {0}")]
    Json(#[from] serde_json::Error),
    /// A verdict reply omitted a field the renderer depends on.
    #[error("reply is missing `{0}`")]
    MissingField(&'static str),
}

/// Credit-history selection as carried on the wire.
///
/// The unselected state is an empty string, never `0`, so the service can
/// tell "no answer" from "no credit history".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreditHistory {
    /// Nothing selected. Serializes as `""`.
    #[default]
    Unset,
    /// An explicit selection (`1` = has history, `0` = none).
    Value(i64),
    /// A non-empty selection that is not a number. Serializes as `null`.
    Invalid,
}

impl CreditHistory {
    /// Normalize a raw form value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Value(value);
        }
        match trimmed.parse::<f64>() {
            #[allow(clippy::cast_possible_truncation)]
            Ok(value) if value.is_finite() => Self::Value(value.trunc() as i64),
            _ => Self::Invalid,
        }
    }

    /// The selected value, if it is a usable number.
    #[must_use]
    pub fn value(self) -> Option<i64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Invalid => None,
        }
    }
}

impl Serialize for CreditHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_str(""),
            Self::Value(value) => serializer.serialize_i64(*value),
            Self::Invalid => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for CreditHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::Invalid),
            Value::String(raw) => Ok(Self::parse(&raw)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Value)
                .or_else(|| n.as_f64().map(|f| Self::parse(&f.to_string())))
                .ok_or_else(|| D::Error::custom("credit history out of range")),
            other => Err(D::Error::custom(format!("unexpected credit history value: {other}"))),
        }
    }
}

/// Categorical columns: `None` travels as `""` so every key is always present.
mod categorical {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|v| !v.trim().is_empty()))
    }
}

/// A loan application normalized from form input.
///
/// Built fresh from live form state each time it is needed and never kept
/// around afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRecord {
    #[serde(rename = "Gender", with = "categorical")]
    pub gender: Option<String>,
    #[serde(rename = "Married", with = "categorical")]
    pub married: Option<String>,
    #[serde(rename = "Dependents", with = "categorical")]
    pub dependents: Option<String>,
    #[serde(rename = "Education", with = "categorical")]
    pub education: Option<String>,
    #[serde(rename = "Employment_Type", with = "categorical")]
    pub employment_type: Option<String>,
    #[serde(rename = "Domain", with = "categorical")]
    pub domain: Option<String>,
    #[serde(rename = "Years_of_Experience")]
    pub years_of_experience: f64,
    #[serde(rename = "ApplicantIncome")]
    pub applicant_income: f64,
    #[serde(rename = "CoapplicantIncome")]
    pub coapplicant_income: f64,
    #[serde(rename = "LoanAmount")]
    pub loan_amount: f64,
    /// Repayment term in months.
    #[serde(rename = "Loan_Amount_Term")]
    pub loan_amount_term: i64,
    /// Annual interest rate in percent.
    #[serde(rename = "Interest_Rate")]
    pub interest_rate: f64,
    #[serde(rename = "Property_Area", with = "categorical")]
    pub property_area: Option<String>,
    #[serde(rename = "Credit_History")]
    pub credit_history: CreditHistory,
}

impl ApplicationRecord {
    /// Combined monthly income of applicant and co-applicant.
    #[must_use]
    pub fn total_income(&self) -> f64 {
        self.applicant_income + self.coapplicant_income
    }

    /// Serialize as the `/predict` request body.
    ///
    /// # Errors
    ///
    /// Returns an error only if a numeric field is not representable in JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The service's approve/decline determination with its explanation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Free-form verdict label, e.g. `"✅ Loan Approved"`.
    pub result: String,
    /// Optional sentence shown under the heading.
    pub intro: Option<String>,
    /// Factors behind the decision, in display order.
    pub reasons: Vec<String>,
    /// Next steps or improvement suggestions, in display order.
    pub improvements: Vec<String>,
}

/// A decoded `/predict` reply.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// The service reported a domain-level failure.
    Rejected(String),
    /// The service produced a verdict.
    Verdict(Verdict),
}

/// Decode a `/predict` reply body.
///
/// A truthy `error` field short-circuits: the verdict fields are not read, so
/// an error reply may carry anything (or nothing) alongside it.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] for malformed bodies or mistyped verdict
/// fields and [`DecodeError::MissingField`] when a verdict reply lacks
/// `result`, `reasons` or `improvements`.
pub fn decode_reply(body: &str) -> Result<Reply, DecodeError> {
    let value: Value = serde_json::from_str(body)?;
    if let Some(message) = value.get("error").and_then(error_text) {
        return Ok(Reply::Rejected(message));
    }
    let result: String = required_field(&value, "result")?;
    let reasons: Vec<String> = required_field(&value, "reasons")?;
    let improvements: Vec<String> = required_field(&value, "improvements")?;
    let intro = value
        .get("intro")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);
    Ok(Reply::Verdict(Verdict { result, intro, reasons, improvements }))
}

fn required_field<T: serde::de::DeserializeOwned>(value: &Value, key: &'static str) -> Result<T, DecodeError> {
    let field = value.get(key).ok_or(DecodeError::MissingField(key))?;
    Ok(T::deserialize(field)?)
}

/// Render an `error` value as text when it is truthy; `null`, `false`, `0`
/// and `""` mean no error.
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
