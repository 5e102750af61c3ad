//! Role-scoped facades over the wedding service's REST API.
//!
//! # Design
//! Both facades share a private `Endpoint` that holds the immutable
//! configuration (base URL, deployment stage, shared secret) and builds
//! authenticated requests; the role split only restricts which operations are
//! exposed. `GuestClient` covers the guest site (browse presents, mark one as
//! bought, RSVP), `DashboardClient` the admin dashboard (full CRUD on both
//! resources). Each method is one blocking request/response round-trip with
//! no retries and no state between calls.
//!
//! Two quirks of the deployed service are kept on purpose:
//! - Updates are sent as POST to the collection path even though they are
//!   logically PUTs; the live frontends were built against that verb.
//! - `update_present` historically never checked the response status. The
//!   default `StatusPolicy::Lenient` reproduces that; `Strict` opts into the
//!   same check every sibling call performs.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{is_error_status, ApiError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{HttpTransport, UreqTransport};
use crate::types::{Confirmation, ConfirmationCreated, Present, PresentCreated};

/// How `GuestClient::update_present` treats the response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Ignore the status entirely, matching the behavior the live frontends
    /// rely on. Server-side failures are invisible to the caller.
    #[default]
    Lenient,
    /// Apply the same `> 300` check as every other call.
    Strict,
}

/// Immutable connection configuration plus request building.
#[derive(Debug, Clone)]
struct Endpoint {
    base_url: String,
    stage: String,
    secret: String,
}

impl Endpoint {
    fn new(base_url: &str, stage: &str, secret: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            stage: stage.to_string(),
            secret: secret.to_string(),
        }
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}{}", self.base_url, self.stage, resource)
    }

    /// Every request carries the shared secret verbatim in `Authorization`.
    /// The service compares the raw header value; this is not a bearer
    /// scheme.
    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Authorization".to_string(), self.secret.clone()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]
    }

    fn get(&self, resource: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url(resource),
            headers: self.headers(),
            query: Vec::new(),
            body: None,
        }
    }

    fn post<T: Serialize>(&self, resource: &str, payload: &T) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.url(resource),
            headers: self.headers(),
            query: Vec::new(),
            body: Some(body),
        })
    }

    fn delete(&self, resource: &str, key: &str, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.url(resource),
            headers: self.headers(),
            query: vec![(key.to_string(), id.to_string())],
            body: None,
        }
    }
}

/// Fail with the mapped `ApiError` when the response status exceeds 300.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if is_error_status(response.status) {
        return Err(ApiError::from_response(response));
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn require_id(id: Option<&String>, entity: &'static str) -> Result<(), ApiError> {
    if id.is_none() {
        return Err(ApiError::MissingId { entity });
    }
    Ok(())
}

/// Client surface exposed to wedding guests.
#[derive(Debug, Clone)]
pub struct GuestClient<T: HttpTransport> {
    endpoint: Endpoint,
    policy: StatusPolicy,
    transport: T,
}

impl GuestClient<UreqTransport> {
    pub fn new(base_url: &str, stage: &str, secret: &str) -> Self {
        Self::with_transport(base_url, stage, secret, UreqTransport::new())
    }
}

impl<T: HttpTransport> GuestClient<T> {
    pub fn with_transport(base_url: &str, stage: &str, secret: &str, transport: T) -> Self {
        Self {
            endpoint: Endpoint::new(base_url, stage, secret),
            policy: StatusPolicy::default(),
            transport,
        }
    }

    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// `GET /presents` — the full gift registry.
    pub fn get_presents(&self) -> Result<Vec<Present>, ApiError> {
        let response = self.transport.execute(self.endpoint.get("/presents"))?;
        check_status(&response)?;
        decode(&response)
    }

    /// Update a present, typically to flip `bought`. Logically a PUT, issued
    /// as `POST /presents` with the full record. Under the default lenient
    /// policy the response status is not inspected.
    pub fn update_present(&self, present: &Present) -> Result<(), ApiError> {
        require_id(present.present_id.as_ref(), "present")?;
        let request = self.endpoint.post("/presents", present)?;
        let response = self.transport.execute(request)?;
        match self.policy {
            StatusPolicy::Lenient => Ok(()),
            StatusPolicy::Strict => check_status(&response),
        }
    }

    /// `POST /confirmations` — submit an RSVP. Returns the server-assigned
    /// confirmation id.
    pub fn create_confirmation(&self, confirmation: &Confirmation) -> Result<String, ApiError> {
        let request = self.endpoint.post("/confirmations", confirmation)?;
        let response = self.transport.execute(request)?;
        check_status(&response)?;
        let created: ConfirmationCreated = decode(&response)?;
        Ok(created.confirmation_id)
    }
}

/// Client surface exposed to the admin dashboard.
#[derive(Debug, Clone)]
pub struct DashboardClient<T: HttpTransport> {
    endpoint: Endpoint,
    transport: T,
}

impl DashboardClient<UreqTransport> {
    pub fn new(base_url: &str, stage: &str, secret: &str) -> Self {
        Self::with_transport(base_url, stage, secret, UreqTransport::new())
    }
}

impl<T: HttpTransport> DashboardClient<T> {
    pub fn with_transport(base_url: &str, stage: &str, secret: &str, transport: T) -> Self {
        Self {
            endpoint: Endpoint::new(base_url, stage, secret),
            transport,
        }
    }

    /// `POST /presents` — add a present to the registry. The record must not
    /// carry an id; the server assigns one and echoes it back under the
    /// snake_case `present_id` key.
    pub fn create_present(&self, present: &Present) -> Result<String, ApiError> {
        let request = self.endpoint.post("/presents", present)?;
        let response = self.transport.execute(request)?;
        check_status(&response)?;
        let created: PresentCreated = decode(&response)?;
        Ok(created.present_id)
    }

    /// `DELETE /presents?presentId={id}`.
    pub fn delete_present(&self, present_id: &str) -> Result<(), ApiError> {
        let request = self.endpoint.delete("/presents", "presentId", present_id);
        let response = self.transport.execute(request)?;
        check_status(&response)
    }

    /// `GET /confirmations` — every RSVP submitted so far.
    pub fn get_confirmations(&self) -> Result<Vec<Confirmation>, ApiError> {
        let response = self
            .transport
            .execute(self.endpoint.get("/confirmations"))?;
        check_status(&response)?;
        decode(&response)
    }

    /// Update a confirmation. Logically a PUT, issued as
    /// `POST /confirmations` with the full record. Unlike the guest side's
    /// `update_present`, this call always checks the response status.
    pub fn update_confirmation(&self, confirmation: &Confirmation) -> Result<(), ApiError> {
        require_id(confirmation.confirmation_id.as_ref(), "confirmation")?;
        let request = self.endpoint.post("/confirmations", confirmation)?;
        let response = self.transport.execute(request)?;
        check_status(&response)
    }

    /// `DELETE /confirmations?confirmationId={id}`.
    pub fn delete_confirmation(&self, confirmation_id: &str) -> Result<(), ApiError> {
        let request = self
            .endpoint
            .delete("/confirmations", "confirmationId", confirmation_id);
        let response = self.transport.execute(request)?;
        check_status(&response)
    }
}
