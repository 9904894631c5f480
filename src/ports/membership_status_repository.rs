//! Membership status repository port.

use crate::domain::foundation::{ContactNumber, DomainError};
use crate::domain::membership::{MembershipStatus, StatusPatch, StatusPeriod};
use async_trait::async_trait;

/// Repository port for membership status records.
///
/// The "one active status per member" rule is enforced at open time only,
/// not as a storage constraint; a concurrent or out-of-band update can
/// still violate it.
#[async_trait]
pub trait MembershipStatusRepository: Send + Sync {
    /// Open a status for a member.
    ///
    /// # Errors
    ///
    /// - `InvalidReference` if the member does not exist
    /// - `ActiveStatusExists` if the member already has an active status
    async fn open(
        &self,
        contact: &ContactNumber,
        period: StatusPeriod,
        is_active: bool,
    ) -> Result<MembershipStatus, DomainError>;

    /// Find the member's active status. Returns `None` if there is none.
    async fn find_active(
        &self,
        contact: &ContactNumber,
    ) -> Result<Option<MembershipStatus>, DomainError>;

    /// List all active statuses.
    async fn list_active(&self) -> Result<Vec<MembershipStatus>, DomainError>;

    /// Apply a partial update to the member's status rows.
    ///
    /// # Errors
    ///
    /// - `StatusNotFound` if the member has no status rows
    /// - `ValidationFailed` if the change violates the date ordering
    async fn update(
        &self,
        contact: &ContactNumber,
        patch: &StatusPatch,
    ) -> Result<(), DomainError>;

    /// Remove every status row for the member.
    ///
    /// # Errors
    ///
    /// - `StatusNotFound` if the member has no status rows
    async fn delete_for(&self, contact: &ContactNumber) -> Result<(), DomainError>;
}
