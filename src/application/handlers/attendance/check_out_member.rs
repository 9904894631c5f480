//! CheckOutMemberHandler - Command handler for closing attendance records.

use std::sync::Arc;

use crate::domain::attendance::CheckInRecord;
use crate::domain::foundation::{ContactNumber, DomainError, Timestamp};
use crate::ports::CheckInRepository;

/// Command to check a member out.
#[derive(Debug, Clone)]
pub struct CheckOutMemberCommand {
    pub contact_number: ContactNumber,
}

/// Handler for member check-out. Closes the most recent open record with a
/// server-assigned timestamp.
pub struct CheckOutMemberHandler {
    check_ins: Arc<dyn CheckInRepository>,
}

impl CheckOutMemberHandler {
    pub fn new(check_ins: Arc<dyn CheckInRepository>) -> Self {
        Self { check_ins }
    }

    pub async fn handle(&self, cmd: CheckOutMemberCommand) -> Result<CheckInRecord, DomainError> {
        let record = self
            .check_ins
            .close_latest(&cmd.contact_number, Timestamp::now())
            .await?;
        tracing::debug!(contact = %cmd.contact_number, id = record.id, "check-in closed");
        Ok(record)
    }
}
