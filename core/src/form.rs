//! Per-example request form.
//!
//! Each form owns its parameter values and the outcome of its last
//! submission. Forms never share state with each other or with the district
//! resolution.

use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::{ApiExample, ParamKind};
use crate::error::ApiError;
use crate::fetch::fetch_json;
use crate::http::Transport;
use crate::query::QueryRequest;

#[derive(Debug, Clone)]
pub struct ExampleForm {
    example: &'static ApiExample,
    query: QueryRequest,
    pub request_url: Option<String>,
    pub response: Option<Value>,
    pub error: Option<String>,
}

impl ExampleForm {
    /// Fresh form with every parameter at its default, or empty.
    pub fn new(example: &'static ApiExample) -> Self {
        let mut query = QueryRequest::new(example.path_template);
        for param in example.params {
            query.set(param.name, param.default_value.unwrap_or(""));
        }
        Self {
            example,
            query,
            request_url: None,
            response: None,
            error: None,
        }
    }

    pub fn example(&self) -> &'static ApiExample {
        self.example
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.query.get(name)
    }

    pub fn set_param(&mut self, name: &str, value: &str) -> Result<(), ApiError> {
        let param = self.example.param(name).ok_or_else(|| {
            ApiError::ValidationFailure(format!(
                "example {} has no parameter named {name}",
                self.example.id
            ))
        })?;
        if param.kind == ParamKind::Number && !value.is_empty() && value.parse::<u64>().is_err() {
            return Err(ApiError::ValidationFailure(format!(
                "{name} must be a non-negative integer, got {value:?}"
            )));
        }
        self.query.set(name, value);
        Ok(())
    }

    /// The URL a submission against `base_url` would request.
    pub fn request_url(&self, base_url: &str) -> Result<String, ApiError> {
        if base_url.trim().is_empty() {
            return Err(ApiError::ConfigurationMissing(
                "primary API base URL is not set".to_string(),
            ));
        }
        Ok(self.query.to_url(base_url.trim()))
    }

    /// Send the request and record its outcome on the form.
    ///
    /// A missing base URL is reported without touching the network and
    /// leaves the last request URL as it was.
    pub fn submit<T: Transport>(&mut self, base_url: &str, transport: &T) -> Result<&Value, ApiError> {
        self.response = None;
        self.error = None;

        let url = match self.request_url(base_url) {
            Ok(url) => url,
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(err);
            }
        };
        self.request_url = Some(url.clone());

        debug!(example = self.example.id, url = %url, "submitting example request");
        match fetch_json(transport, &url) {
            Ok(value) => Ok(&*self.response.insert(value)),
            Err(err) => {
                warn!(example = self.example.id, url = %url, error = %err, "example request failed");
                self.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
