//! GET-and-parse-JSON wrapper.
//!
//! No retries and no timeouts of its own. Redundancy across base URLs lives in
//! `fallback`; example requests surface whatever this returns.

use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Interpret a response as JSON.
///
/// A non-2xx status wins over a bad body: the error carries the parsed body
/// when it is JSON and `None` otherwise.
pub fn parse_json(response: HttpResponse) -> Result<Value, FetchError> {
    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            code: response.status,
            body: serde_json::from_str(&response.body).ok(),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| FetchError::InvalidJson(e.to_string()))
}

/// Issue `GET url` through `transport` and parse the body as JSON.
pub fn fetch_json<T: Transport>(transport: &T, url: &str) -> Result<Value, FetchError> {
    debug!(url, "GET");
    let response = transport.execute(&HttpRequest::get(url))?;
    debug!(url, status = response.status, "response received");
    parse_json(response)
}
