//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values; the one place that touches the
//! network is the caller's `Transport` implementation. Tests swap in a
//! scripted transport, the CLI plugs in ureq.

use crate::error::FetchError;

/// HTTP method for a request. The geographic API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Fully formed URL, query string included.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A bare GET with no headers and no body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests against the network.
///
/// Non-2xx statuses must be returned as `Ok(HttpResponse)`; only failures
/// where no response arrived map to `Err(FetchError::Transport)`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        (**self).execute(request)
    }
}
