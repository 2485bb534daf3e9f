//! Synchronous client core for the Guangzhou district/street/road API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller supplies a
//! `Transport` that performs the actual GET.
//!
//! # Design
//! - `GeoClient` is stateless; it holds only `base_url`.
//! - `fallback::resolve` loads districts from the first configured base URL
//!   that answers with a valid list, trying candidates strictly in order.
//! - `state::DistrictsState` projects resolver outcomes for rendering and
//!   drops outcomes of superseded refreshes.
//! - `Explorer` owns all mutable state: configuration, districts and one
//!   `ExampleForm` per catalog entry.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod explorer;
pub mod fallback;
pub mod fetch;
pub mod form;
pub mod http;
pub mod query;
pub mod state;
pub mod types;

pub use catalog::{find_example, ApiExample, ApiParam, ParamKind, EXAMPLES};
pub use client::{validate_districts, GeoClient};
pub use config::{ApiConfig, PRIMARY_DEFAULT_BASE_URL, SECONDARY_DEFAULT_BASE_URL};
pub use error::{ApiError, FetchError};
pub use explorer::Explorer;
pub use fallback::{resolve, BaseUrlCandidate, FallbackOutcome};
pub use fetch::{fetch_json, parse_json};
pub use form::ExampleForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use query::{build_url, trim_base_url, QueryRequest};
pub use state::{DistrictsState, RefreshTicket};
pub use types::{ApiErrorBody, PageMeta, Road, RoadQuery, RoadsPage, Street, StreetQuery};
