//! Wire records for the two resources the service exposes.
//!
//! # Design
//! The wire format uses camelCase keys (`presentId`, `imgUrl`, ...) while the
//! in-memory fields stay snake_case; `rename_all` bridges the two. Identifiers
//! are server-assigned, so they are optional in memory and omitted from the
//! JSON entirely when absent. Creation requests therefore never send a
//! null or empty id.

use serde::{Deserialize, Serialize};

/// A gift-registry item.
///
/// `present_id` is `None` until the service has stored the present; updates
/// and deletes require it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Present {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_id: Option<String>,
    pub present_title: String,
    pub img_url: String,
    pub product_url: String,
    pub bought: bool,
}

/// An RSVP record submitted by a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_id: Option<String>,
    pub name: String,
    pub surname: String,
    pub attending: bool,
    /// Meal choice.
    pub eating: String,
    pub allergies: String,
    /// Free-text comment from the guest.
    pub textfield: String,
}

/// Body of a successful `POST /presents`.
///
/// The service echoes the stored present here in snake_case, the one spot on
/// the wire that breaks the camelCase convention. Only the id is read.
#[derive(Debug, Clone, Deserialize)]
pub struct PresentCreated {
    pub present_id: String,
}

/// Body of a successful `POST /confirmations`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationCreated {
    pub confirmation_id: String,
}
