//! CheckInMemberHandler - Command handler for opening attendance records.

use std::sync::Arc;

use crate::domain::attendance::CheckInRecord;
use crate::domain::foundation::{ContactNumber, DomainError, Timestamp};
use crate::ports::CheckInRepository;

/// Command to check a member in.
#[derive(Debug, Clone)]
pub struct CheckInMemberCommand {
    pub contact_number: ContactNumber,
}

/// Handler for member check-in. The check-in time is server-assigned.
pub struct CheckInMemberHandler {
    check_ins: Arc<dyn CheckInRepository>,
}

impl CheckInMemberHandler {
    pub fn new(check_ins: Arc<dyn CheckInRepository>) -> Self {
        Self { check_ins }
    }

    pub async fn handle(&self, cmd: CheckInMemberCommand) -> Result<CheckInRecord, DomainError> {
        let record = self
            .check_ins
            .open(&cmd.contact_number, Timestamp::now())
            .await?;
        tracing::debug!(contact = %cmd.contact_number, id = record.id, "check-in opened");
        Ok(record)
    }
}
