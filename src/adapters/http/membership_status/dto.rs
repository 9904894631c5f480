//! HTTP DTOs for membership status endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::membership::{MembershipStatus, StatusPatch, StatusPeriod};

/// Request to open a membership status for a member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStatusRequest {
    pub contact_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Defaults to active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CreateStatusRequest {
    /// Validates the date ordering once, at the boundary.
    pub fn period(&self) -> Result<StatusPeriod, ValidationError> {
        StatusPeriod::new(self.start_date, self.end_date)
    }
}

/// Request to update a member's status rows; absent fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

impl UpdateStatusRequest {
    pub fn into_patch(self) -> Result<StatusPatch, ValidationError> {
        let patch = StatusPatch {
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
        };
        patch.validate()?;
        Ok(patch)
    }
}

/// Status details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub id: i64,
    pub contact_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl From<MembershipStatus> for StatusResponse {
    fn from(status: MembershipStatus) -> Self {
        Self {
            id: status.id,
            contact_number: status.contact_number.to_string(),
            start_date: status.period.start_date(),
            end_date: status.period.end_date(),
            is_active: status.is_active,
        }
    }
}

/// Result message for update/delete operations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
