//! Domain DTOs for the geographic API.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently so the
//! core does not depend on axum. Integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// One street and the district it belongs to, as returned by `/streets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Street {
    pub street_name: String,
    pub district_name: String,
}

/// A road and every street and district it crosses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Road {
    pub road_name: String,
    pub streets: Vec<String>,
    pub districts: Vec<String>,
}

/// Pagination metadata of a `/roads` response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_records: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

/// Body of a `/roads` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadsPage {
    pub meta: PageMeta,
    pub data: Vec<Road>,
}

/// Error body any endpoint may send with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Filters for `/streets`. Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetQuery {
    pub district: String,
    pub name: String,
}

/// Filters and paging for `/roads`. `None` paging leaves the server default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadQuery {
    pub district: String,
    pub street: String,
    pub name: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}
