//! Synchronous client for the wedding planning service's REST API.
//!
//! # Overview
//! Two role-scoped facades wrap the same small HTTP surface: [`GuestClient`]
//! for the guest site (browse presents, mark one as bought, submit an RSVP)
//! and [`DashboardClient`] for the admin dashboard (full CRUD on presents and
//! confirmations). Each method is a single blocking request/response
//! round-trip; the client holds no state between calls beyond its immutable
//! configuration (base URL, deployment stage, shared secret).
//!
//! # Design
//! - Requests are plain data ([`HttpRequest`]) executed through an injectable
//!   [`HttpTransport`], so every call path is testable without a network.
//!   [`UreqTransport`] is the blocking default.
//! - Every request carries the shared secret verbatim in the `Authorization`
//!   header, plus `Content-Type: application/json`.
//! - Wire JSON uses camelCase keys; the in-memory records use snake_case.
//! - Response statuses above 300 map to [`ApiError`]; see `error` for the
//!   classification and the deliberately literal boundary.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{DashboardClient, GuestClient, StatusPolicy};
pub use error::{ApiError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, UreqTransport};
pub use types::{Confirmation, Present};
