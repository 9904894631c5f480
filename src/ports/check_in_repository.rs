//! Check-in record repository port.

use crate::domain::attendance::CheckInRecord;
use crate::domain::foundation::{ContactNumber, DomainError, Timestamp};
use async_trait::async_trait;

/// Repository port for attendance records.
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Open a check-in record at the given time.
    ///
    /// # Errors
    ///
    /// - `InvalidReference` if the member does not exist
    /// - `OpenCheckInExists` if the member already has an open record
    async fn open(
        &self,
        contact: &ContactNumber,
        at: Timestamp,
    ) -> Result<CheckInRecord, DomainError>;

    /// Close the member's most recent open record, stamping the check-out
    /// time.
    ///
    /// # Errors
    ///
    /// - `CheckInNotFound` if the member has no open record
    async fn close_latest(
        &self,
        contact: &ContactNumber,
        at: Timestamp,
    ) -> Result<CheckInRecord, DomainError>;

    /// The member's records, most recent first.
    async fn records_for(
        &self,
        contact: &ContactNumber,
    ) -> Result<Vec<CheckInRecord>, DomainError>;

    /// All records.
    async fn list(&self) -> Result<Vec<CheckInRecord>, DomainError>;

    /// Remove every record for the member.
    ///
    /// # Errors
    ///
    /// - `CheckInNotFound` if the member has no records
    async fn delete_for(&self, contact: &ContactNumber) -> Result<(), DomainError>;
}
