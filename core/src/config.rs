//! The two user-editable base URLs and how each is used.
//!
//! The secondary URL is tried first when loading districts; the primary URL is
//! the second chance there and the only base for example requests.

use crate::error::ApiError;
use crate::fallback::BaseUrlCandidate;
use crate::query::trim_base_url;

pub const PRIMARY_DEFAULT_BASE_URL: &str = "https://guangzhou-api-v2.526404.xyz";
pub const SECONDARY_DEFAULT_BASE_URL: &str = "https://guangzhou-api-v2.2748685958.workers.dev";

pub const PRIMARY_LABEL: &str = "primary";
pub const SECONDARY_LABEL: &str = "secondary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub primary: String,
    pub secondary: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            primary: PRIMARY_DEFAULT_BASE_URL.to_string(),
            secondary: SECONDARY_DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Secondary first, primary second. Blank entries are kept; the resolver
    /// drops them.
    pub fn district_candidates(&self) -> Vec<BaseUrlCandidate> {
        vec![
            BaseUrlCandidate::new(self.secondary.clone(), SECONDARY_LABEL, 0),
            BaseUrlCandidate::new(self.primary.clone(), PRIMARY_LABEL, 1),
        ]
    }

    /// Base URL for example requests.
    pub fn query_base(&self) -> Result<&str, ApiError> {
        let primary = self.primary.trim();
        if primary.is_empty() {
            return Err(ApiError::ConfigurationMissing(
                "primary API base URL is not set".to_string(),
            ));
        }
        Ok(trim_base_url(primary))
    }
}
