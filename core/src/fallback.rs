//! Priority-ordered fallback across base URLs for the district list.
//!
//! # Design
//! Candidates are tried one at a time, lowest `priority` first. The first one
//! that answers 2xx with a valid district list wins and nothing after it is
//! attempted. Every other outcome (transport error, non-2xx, bad JSON, wrong
//! shape) is recorded as a message and the loop moves on. Only when every
//! candidate has failed does the caller see the accumulated messages.
//!
//! Candidates whose URL is blank are dropped before ordering: they are
//! neither attempted nor reported.

use tracing::{info, warn};

use crate::client::GeoClient;
use crate::error::ApiError;
use crate::http::Transport;

/// Reported when no candidate has a usable URL.
pub const NO_BASE_URL_CONFIGURED: &str =
    "neither the primary nor the secondary API base URL is set";

/// One configured root URL the client may load districts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrlCandidate {
    pub url: String,
    pub label: String,
    /// Lower values are tried first.
    pub priority: i32,
}

impl BaseUrlCandidate {
    pub fn new(url: impl Into<String>, label: impl Into<String>, priority: i32) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
            priority,
        }
    }
}

/// Result of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackOutcome {
    Success {
        districts: Vec<String>,
        /// `{label} ({url})` of the candidate that answered.
        source_label: String,
    },
    Failure {
        errors: Vec<String>,
    },
}

impl FallbackOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FallbackOutcome::Success { .. })
    }
}

/// Resolve the district list against `candidates`.
pub fn resolve<T: Transport>(transport: &T, candidates: &[BaseUrlCandidate]) -> FallbackOutcome {
    let mut ordered: Vec<&BaseUrlCandidate> = candidates
        .iter()
        .filter(|c| !c.url.trim().is_empty())
        .collect();
    // Stable: equal priorities keep configuration order.
    ordered.sort_by_key(|c| c.priority);

    if ordered.is_empty() {
        warn!("no base URL configured for district lookup");
        return FallbackOutcome::Failure {
            errors: vec![NO_BASE_URL_CONFIGURED.to_string()],
        };
    }

    let mut errors: Vec<String> = Vec::new();
    for candidate in ordered {
        let client = GeoClient::new(&candidate.url);
        let url = client.base_url();
        let label = &candidate.label;
        info!(label = %label, url, "loading districts");

        let attempt = transport
            .execute(&client.build_districts())
            .map_err(ApiError::from)
            .and_then(|response| client.parse_districts(response));

        match attempt {
            Ok(districts) => {
                info!(label = %label, url, count = districts.len(), "districts loaded");
                return FallbackOutcome::Success {
                    districts,
                    source_label: format!("{label} ({url})"),
                };
            }
            Err(err) => {
                warn!(label = %label, url, error = %err, "district lookup failed");
                let message = describe_failure(label, url, &err);
                if !errors.contains(&message) {
                    errors.push(message);
                }
            }
        }
    }

    FallbackOutcome::Failure { errors }
}

fn describe_failure(label: &str, url: &str, err: &ApiError) -> String {
    match err {
        ApiError::ValidationFailure(detail) => {
            format!("districts from {label} ({url}) are malformed: {detail}")
        }
        other => format!("failed to load districts from {label} ({url}): {other}"),
    }
}
