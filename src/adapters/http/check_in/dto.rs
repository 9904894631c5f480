//! HTTP DTOs for check-in endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::attendance::CheckInRecord;
use crate::domain::foundation::Timestamp;

/// Request to check a member in.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub contact_number: String,
}

/// Check-in record for API responses.
///
/// The two status flags are derived from the check-out timestamp; the
/// admin UI still expects them as booleans.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResponse {
    pub id: i64,
    pub contact_number: String,
    pub check_in_at: Timestamp,
    pub check_out_at: Option<Timestamp>,
    pub checked_in: bool,
    pub checked_out: bool,
}

impl From<CheckInRecord> for CheckInResponse {
    fn from(record: CheckInRecord) -> Self {
        let checked_out = !record.is_open();
        Self {
            id: record.id,
            contact_number: record.contact_number.to_string(),
            check_in_at: record.check_in_at,
            check_out_at: record.check_out_at,
            checked_in: true,
            checked_out,
        }
    }
}

/// Result message for delete operations.
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
