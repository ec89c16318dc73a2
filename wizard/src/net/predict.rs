//! Guarded submission of an application to the prediction service.
//!
//! ERROR HANDLING
//! ==============
//! Every way a submit can end short of a verdict is a [`SubmitError`], and
//! each variant has exactly one user-facing message. Domain errors reported by
//! the service are not transport failures and are shown verbatim.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use schema::{ApplicationRecord, DecodeError, Reply, Verdict};

use super::transport::{PredictTransport, TransportError};

pub const GUARD_ALERT: &str = "Please select loan term and credit history";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The record failed the pre-send check; nothing was sent.
    #[error("{}", GUARD_ALERT)]
    Guard,
    /// The service answered with an `error` field.
    #[error("{0}")]
    Domain(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("could not encode application: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmitError {
    /// Text shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Guard => GUARD_ALERT.to_owned(),
            Self::Domain(message) => format!("Error: {message}"),
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => format!("Server error: {self}"),
        }
    }

    /// Guard failures are raised as a blocking alert instead of in the result area.
    #[must_use]
    pub fn is_guard(&self) -> bool {
        matches!(self, Self::Guard)
    }
}

/// Final pre-send check, independent of step validation: the term must be
/// non-zero and credit history must be an actual number.
///
/// # Errors
///
/// Returns [`SubmitError::Guard`] when either check fails.
pub fn guard(record: &ApplicationRecord) -> Result<(), SubmitError> {
    if record.loan_amount_term == 0 || record.credit_history.value().is_none() {
        return Err(SubmitError::Guard);
    }
    Ok(())
}

/// POST `record` to `path` once and decode the reply.
///
/// The HTTP status is not consulted: the service reports domain failures as a
/// JSON body with an `error` field, whatever the status.
///
/// # Errors
///
/// Returns [`SubmitError::Guard`] without touching the transport when the
/// guard fails, [`SubmitError::Domain`] for service-reported errors, and
/// transport, decode or encode errors otherwise.
pub async fn submit<T: PredictTransport>(
    transport: &T,
    path: &str,
    record: &ApplicationRecord,
) -> Result<Verdict, SubmitError> {
    guard(record)?;
    let body = record.to_json()?;
    leptos::logging::log!("submitting application to {path}");
    let reply = transport.post_json(path, &body).await.inspect_err(|err| {
        leptos::logging::warn!("prediction request failed: {err}");
    })?;
    match schema::decode_reply(&reply)? {
        Reply::Rejected(message) => {
            leptos::logging::warn!("prediction service error: {message}");
            Err(SubmitError::Domain(message))
        }
        Reply::Verdict(verdict) => Ok(verdict),
    }
}
