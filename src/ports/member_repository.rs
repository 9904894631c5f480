//! Member repository port.
//!
//! Defines the contract for persisting and retrieving member records.
//! Implementations perform the referential checks inside one transaction
//! per logical operation.

use crate::domain::foundation::{ContactNumber, DomainError};
use crate::domain::member::{Member, MemberPatch};
use async_trait::async_trait;

/// Repository port for member persistence.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a new member.
    ///
    /// # Errors
    ///
    /// - `MemberExists` if the contact number is already registered
    /// - `DatabaseError` on persistence failure
    async fn create(&self, member: &Member) -> Result<(), DomainError>;

    /// Find a member by contact number. Returns `None` if not found.
    async fn find(&self, contact: &ContactNumber) -> Result<Option<Member>, DomainError>;

    /// List all members.
    async fn list(&self) -> Result<Vec<Member>, DomainError>;

    /// Apply a partial update. Only supplied fields change.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if no row matched
    /// - `DatabaseError` on persistence failure
    async fn update(
        &self,
        contact: &ContactNumber,
        patch: &MemberPatch,
    ) -> Result<(), DomainError>;

    /// Delete a member. Dependent statuses, check-ins, transactions, and
    /// photos are removed by the schema's cascade rules in the same
    /// transaction.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if no row matched
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, contact: &ContactNumber) -> Result<(), DomainError>;
}
