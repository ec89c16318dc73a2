//! HTTP transport for the prediction request.
//!
//! Client-side (csr): a real `fetch` POST via `gloo-net`.
//! Native builds: [`BrowserTransport`] reports itself unavailable, and tests
//! supply their own [`PredictTransport`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

/// Failure to complete the HTTP exchange. Carries the underlying detail text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(String),
    #[error("network unavailable outside the browser")]
    Unavailable,
}

/// Sends one JSON POST and yields the raw response body.
///
/// Implementations must not retry: one call is one request.
pub trait PredictTransport {
    fn post_json(&self, path: &str, body: &str) -> impl Future<Output = Result<String, TransportError>>;
}

/// `fetch`-backed transport used by the running page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl PredictTransport for BrowserTransport {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    async fn post_json(&self, path: &str, body: &str) -> Result<String, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(path)
                .header("Content-Type", "application/json")
                .body(body.to_owned())
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            resp.text().await.map_err(|e| TransportError::Request(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError::Unavailable)
        }
    }
}
