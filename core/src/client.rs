//! Stateless request builder and response parser for the geographic API.
//!
//! # Design
//! `GeoClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the round-trip.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::fetch::parse_json;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::{trim_base_url, QueryRequest};
use crate::types::{RoadQuery, RoadsPage, Street, StreetQuery};

/// Synchronous, stateless client for the geographic API.
#[derive(Debug, Clone)]
pub struct GeoClient {
    base_url: String,
}

impl GeoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: trim_base_url(base_url.trim()).to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/districts`, without the trailing `?` example URLs carry.
    pub fn build_districts(&self) -> HttpRequest {
        HttpRequest::get(format!("{}/districts", self.base_url))
    }

    pub fn build_streets(&self, query: &StreetQuery) -> HttpRequest {
        let req = QueryRequest::new("/streets")
            .with("district", query.district.as_str())
            .with("name", query.name.as_str());
        HttpRequest::get(req.to_url(&self.base_url))
    }

    pub fn build_roads(&self, query: &RoadQuery) -> HttpRequest {
        let req = QueryRequest::new("/roads")
            .with("district", query.district.as_str())
            .with("street", query.street.as_str())
            .with("name", query.name.as_str())
            .with("page", query.page.map(|p| p.to_string()).unwrap_or_default())
            .with(
                "pageSize",
                query.page_size.map(|p| p.to_string()).unwrap_or_default(),
            );
        HttpRequest::get(req.to_url(&self.base_url))
    }

    pub fn parse_districts(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        let value = parse_json(response)?;
        validate_districts(&value)
    }

    pub fn parse_streets(&self, response: HttpResponse) -> Result<Vec<Street>, ApiError> {
        decode(parse_json(response)?)
    }

    pub fn parse_roads(&self, response: HttpResponse) -> Result<RoadsPage, ApiError> {
        decode(parse_json(response)?)
    }
}

/// Accept `value` only if it is an array whose every element is a string.
pub fn validate_districts(value: &Value) -> Result<Vec<String>, ApiError> {
    let items = value.as_array().ok_or_else(|| {
        ApiError::ValidationFailure(format!("expected an array of strings, got {}", kind_of(value)))
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ApiError::ValidationFailure(format!(
                    "expected an array of strings, element {i} is {}",
                    kind_of(item)
                ))
            })
        })
        .collect()
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ValidationFailure(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
