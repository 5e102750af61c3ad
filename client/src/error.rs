//! Error types for the wedding API client.
//!
//! # Design
//! Non-success responses become a tagged `ApiError::Status` carrying a
//! classification, the exact wire status code, and the optional message the
//! service puts in the `error` field of its JSON bodies. Statuses the service
//! is not known to produce land in `UnexpectedStatus` with the raw body for
//! debugging.

use std::fmt;

use crate::http::HttpResponse;

/// Classification of the status codes the service is known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 400 — the request body or parameters failed validation.
    BadRequest,
    /// 401 — the shared secret was missing or wrong.
    Unauthorized,
    /// 404 — the addressed record does not exist.
    NotFound,
    /// 500 — the service failed internally.
    ServerError,
}

impl ErrorKind {
    /// Classify a status code, or `None` for codes outside the known set.
    pub fn from_status(status: u16) -> Option<ErrorKind> {
        match status {
            400 => Some(ErrorKind::BadRequest),
            401 => Some(ErrorKind::Unauthorized),
            404 => Some(ErrorKind::NotFound),
            500 => Some(ErrorKind::ServerError),
            _ => None,
        }
    }
}

/// Errors returned by the `GuestClient` and `DashboardClient` facades.
#[derive(Debug)]
pub enum ApiError {
    /// A non-success response with one of the service's known status codes.
    /// `status` preserves the exact wire code; `message` is the `error` field
    /// of the JSON body when the service supplied one.
    Status {
        kind: ErrorKind,
        status: u16,
        message: Option<String>,
    },

    /// A non-success response with a status code outside the known set.
    UnexpectedStatus { status: u16, body: String },

    /// An update or delete was attempted on a record that has no
    /// server-assigned identifier yet.
    MissingId { entity: &'static str },

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The HTTP round-trip itself failed (connection, DNS, I/O).
    Transport(String),
}

/// The service's success/failure boundary, kept literal: a response fails
/// iff its status is greater than 300. Exactly 300 counts as success and
/// 301 as failure, so 3xx redirects surface as `UnexpectedStatus` rather
/// than being followed or ignored. The live contract uses this threshold,
/// not the conventional `>= 400`.
pub fn is_error_status(status: u16) -> bool {
    status > 300
}

impl ApiError {
    /// Map a non-success response to a typed error.
    ///
    /// The optional message is read from the `error` field of the body when
    /// the body is a JSON object; any other body shape yields no message.
    pub fn from_response(response: &HttpResponse) -> ApiError {
        let message = serde_json::from_str::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|m| m.as_str().map(str::to_string))
            });
        match ErrorKind::from_status(response.status) {
            Some(kind) => ApiError::Status {
                kind,
                status: response.status,
                message,
            },
            None => ApiError::UnexpectedStatus {
                status: response.status,
                body: response.body.clone(),
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status {
                status,
                message: Some(message),
                ..
            } => write!(f, "HTTP {status}: {message}"),
            ApiError::Status { status, .. } => write!(f, "HTTP {status}"),
            ApiError::UnexpectedStatus { status, body } => {
                write!(f, "unexpected HTTP {status}: {body}")
            }
            ApiError::MissingId { entity } => {
                write!(f, "{entity} has no server-assigned id")
            }
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
