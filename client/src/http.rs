//! HTTP requests and responses as plain data.
//!
//! # Design
//! The facades describe every call as an `HttpRequest` value and hand it to an
//! injected transport, so request building and response handling stay
//! deterministic and testable without a network. Owned `String` / `Vec` fields
//! keep the values trivially cloneable for test fakes.

/// HTTP method for a request.
///
/// There is no `Put` variant: the wedding service's update calls are issued
/// as POST to the collection path, and a real PUT would not match the
/// deployed routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data, ready for a transport to execute.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Query parameters, appended by the transport. Used by the delete calls,
    /// which address records via `presentId` / `confirmationId`.
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response reduced to what the client interprets: the raw status
/// code and the body text. Status interpretation happens in the facades,
/// never in the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
