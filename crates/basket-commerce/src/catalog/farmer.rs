//! Farmer profile type.

use crate::ids::FarmerId;
use serde::{Deserialize, Serialize};

/// A farmer selling on the marketplace, from `GET /api/farmers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    /// Unique farmer identifier.
    pub id: FarmerId,
    /// Display name.
    pub name: String,
    /// Farm location label.
    pub location: String,
    /// Profile bio text.
    #[serde(default)]
    pub bio: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Years active on the marketplace.
    #[serde(default)]
    pub years_active: Option<u32>,
}
