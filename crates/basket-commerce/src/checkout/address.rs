//! Shipping address types and validation.

use crate::error::CommerceError;
use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// A shipping destination as entered in the address step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Address line 1 (apartment, suite, unit).
    pub address1: String,
    /// Address line 2 (street and city).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// State name.
    pub state: String,
    /// Postal code, exactly 6 digits.
    pub zip: String,
    /// Phone number, exactly 10 digits (country prefix is implied).
    pub phone: String,
    /// Whether the user asked to keep this address for future orders.
    /// Carried on the wire; the client attaches no behavior to it.
    #[serde(default)]
    pub save_address: bool,
}

impl Address {
    /// Validate the address client-side.
    ///
    /// Runs before any request is sent; a failure here blocks submission
    /// entirely. Checks required fields and the zip/phone digit patterns.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.first_name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "first name is required".to_string(),
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "last name is required".to_string(),
            ));
        }
        if self.address1.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "address line 1 is required".to_string(),
            ));
        }
        if self.state.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "state is required".to_string(),
            ));
        }
        if !is_digits(&self.zip, 6) {
            return Err(CommerceError::ValidationError(
                "zip must be exactly 6 digits".to_string(),
            ));
        }
        if !is_digits(&self.phone, 10) {
            return Err(CommerceError::ValidationError(
                "phone must be exactly 10 digits".to_string(),
            ));
        }
        Ok(())
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as a single display line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address1.clone()];
        if let Some(ref addr2) = self.address2 {
            parts.push(addr2.clone());
        }
        parts.push(self.state.clone());
        parts.push(self.zip.clone());
        parts.join(", ")
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// An address as persisted by the Order Source.
///
/// The id returned here is threaded explicitly into the order submission,
/// so the order never has to guess which address is "the latest".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressRecord {
    /// Backend-assigned identifier.
    pub id: AddressId,
    /// The submitted address fields.
    #[serde(flatten)]
    pub address: Address,
}
