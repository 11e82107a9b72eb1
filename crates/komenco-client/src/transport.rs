//! Transport seam between the client and the wire.
//!
//! [`HttpTransport`] is the production implementation: one blocking POST
//! per request, no retries, no backoff. Tests substitute their own
//! [`Transport`] to exercise the client without a network.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::api::{RunRequest, RunResponse};
use crate::error::ClientResult;

/// Path of the single Komenco execution endpoint.
pub const ENDPOINT_PATH: &str = "/api/komenco";

/// Carries one serialized request to the service and returns its parsed
/// response.
pub trait Transport: Send + Sync {
    /// Perform one request/response exchange.
    fn execute(&self, request: &RunRequest) -> ClientResult<RunResponse>;
}

/// Blocking HTTP transport against a fixed host and port.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpTransport {
    /// Create a transport targeting `http://{host}:{port}/api/komenco`.
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: format!("http://{host}:{port}{ENDPOINT_PATH}"),
        }
    }

    /// Full endpoint URL this transport posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &RunRequest) -> ClientResult<RunResponse> {
        debug!("POST {}", self.url);

        let body = serde_json::to_vec(request)?;
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json; utf-8")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()?;

        let text = response.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_built_from_host_and_port() {
        let transport = HttpTransport::new("quantum.example.com", 8080);
        assert_eq!(
            transport.url(),
            "http://quantum.example.com:8080/api/komenco"
        );
    }
}
