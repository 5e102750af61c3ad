//! Pluggable HTTP execution behind the facades.
//!
//! # Design
//! The facades only know how to build `HttpRequest` values and interpret
//! `HttpResponse` values; the round-trip in between goes through
//! `HttpTransport`. Production code uses `UreqTransport`; tests inject a fake
//! that returns canned responses. The transport performs no status
//! interpretation of its own — 4xx/5xx responses come back as data.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx responses as `Ok` data; `Err` is
/// reserved for failures of the round-trip itself.
pub trait HttpTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
///
/// The agent is configured with `http_status_as_error(false)` so error
/// statuses are returned as plain responses for the caller's status mapping,
/// rather than surfacing as transport errors.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
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

impl HttpTransport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            query,
            body,
        } = request;

        let result = match method {
            HttpMethod::Get => {
                let mut call = self.agent.get(&url);
                for (name, value) in &headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                for (name, value) in &query {
                    call = call.query(name.as_str(), value.as_str());
                }
                call.call()
            }
            HttpMethod::Delete => {
                let mut call = self.agent.delete(&url);
                for (name, value) in &headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                for (name, value) in &query {
                    call = call.query(name.as_str(), value.as_str());
                }
                call.call()
            }
            HttpMethod::Post => {
                let mut call = self.agent.post(&url);
                for (name, value) in &headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                for (name, value) in &query {
                    call = call.query(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => call.send(body.as_bytes()),
                    None => call.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
