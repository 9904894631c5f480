//! Strongly-typed identifier value objects.
//!
//! Both keys in this system are externally supplied strings: the member's
//! phone number and the shared catalog item code. Construction validates
//! shape once; everything downstream can trust the invariants.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A member's contact (phone) number, used as the member primary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub const MAX_LEN: usize = 20;

    /// Creates a contact number, rejecting empty or over-long values.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("contact_number"));
        }
        if value.len() > Self::MAX_LEN {
            return Err(ValidationError::too_long("contact_number", Self::MAX_LEN));
        }
        Ok(Self(value))
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog item code, shared between products and membership plans.
///
/// The P-/M- prefix split is a naming convention only; nothing enforces it
/// and lookups always consult both tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(String);

impl ItemCode {
    pub const MAX_LEN: usize = 20;

    /// Creates an item code, rejecting empty or over-long values.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("item_code"));
        }
        if value.len() > Self::MAX_LEN {
            return Err(ValidationError::too_long("item_code", Self::MAX_LEN));
        }
        Ok(Self(value))
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
