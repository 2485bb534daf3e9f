//! ureq-backed `Transport` for the CLI.

use geo_core::{FetchError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::debug;

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Non-2xx statuses come back as responses; the core interprets them.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        let mut response = match request.method {
            HttpMethod::Get => self.agent.get(&request.path).call(),
        }
        .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| FetchError::Transport(format!("reading response body: {e}")))?;
        debug!(url = %request.path, status, bytes = body.len(), "HTTP GET done");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
