//! Top-level controller owning every piece of mutable client state.
//!
//! Base URLs change only through the setters here, districts only through a
//! resolver outcome, and each form only through its own methods.

use serde_json::Value;

use crate::catalog::{ApiParam, ParamKind, EXAMPLES};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::fallback::{resolve, FallbackOutcome};
use crate::form::ExampleForm;
use crate::http::Transport;
use crate::state::DistrictsState;

#[derive(Debug, Clone)]
pub struct Explorer {
    config: ApiConfig,
    pub districts: DistrictsState,
    forms: Vec<ExampleForm>,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl Explorer {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            districts: DistrictsState::new(),
            forms: EXAMPLES.iter().map(ExampleForm::new).collect(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Change the primary URL. Returns whether districts need a refresh.
    pub fn set_primary_url(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        let changed = self.config.primary != url;
        self.config.primary = url;
        changed
    }

    /// Change the secondary URL. Returns whether districts need a refresh.
    pub fn set_secondary_url(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        let changed = self.config.secondary != url;
        self.config.secondary = url;
        changed
    }

    /// Re-run the fallback resolution and replace the district state.
    pub fn refresh_districts<T: Transport>(&mut self, transport: &T) -> &DistrictsState {
        let ticket = self.districts.begin_refresh();
        let outcome: FallbackOutcome = resolve(transport, &self.config.district_candidates());
        self.districts.apply(ticket, outcome);
        &self.districts
    }

    pub fn forms(&self) -> &[ExampleForm] {
        &self.forms
    }

    pub fn form(&self, id: &str) -> Option<&ExampleForm> {
        self.forms.iter().find(|f| f.example().id == id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut ExampleForm> {
        self.forms.iter_mut().find(|f| f.example().id == id)
    }

    /// Submit example `id` against the primary URL.
    pub fn submit<T: Transport>(&mut self, id: &str, transport: &T) -> Result<&Value, ApiError> {
        let base = self.config.primary.clone();
        let form = self
            .forms
            .iter_mut()
            .find(|f| f.example().id == id)
            .ok_or_else(|| ApiError::ValidationFailure(format!("unknown example {id}")))?;
        form.submit(&base, transport)
    }

    /// Values a dropdown for `param` may offer. Empty while loading or after
    /// a failed load, and for non-dropdown parameters.
    pub fn district_choices(&self, param: &ApiParam) -> &[String] {
        if param.kind != ParamKind::DistrictDropdown || self.districts.is_loading {
            return &[];
        }
        &self.districts.districts
    }
}
