//! Error types for the geographic API client.
//!
//! # Design
//! `FetchError` covers what can go wrong on a single GET round-trip: the
//! transport failed, the server answered with a non-2xx status, or the body
//! was not JSON. `ApiError` wraps it and adds the two failures that only make
//! sense above the wire: a response that parsed but has the wrong shape, and a
//! missing base URL.

use serde_json::Value;
use thiserror::Error;

/// Failures of one GET request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Network, DNS or connection failure; no response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but its status was not 2xx. `body` holds the
    /// parsed JSON body when there was one.
    #[error("{}", http_status_message(.code, .body))]
    HttpStatus { code: u16, body: Option<Value> },

    /// A 2xx response whose body could not be parsed as JSON.
    #[error("invalid JSON in response body: {0}")]
    InvalidJson(String),
}

/// Errors surfaced by the client, resolver and example forms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The response was valid JSON but not the shape the endpoint promises.
    #[error("malformed response: {0}")]
    ValidationFailure(String),

    /// No usable base URL is configured.
    #[error("{0}")]
    ConfigurationMissing(String),
}

/// Prefer the server's `error` field, fall back to the bare status code.
fn http_status_message(code: &u16, body: &Option<Value>) -> String {
    match body.as_ref().and_then(|b| b.get("error")).and_then(Value::as_str) {
        Some(msg) => msg.to_string(),
        None => format!("request failed with status {code}"),
    }
}
