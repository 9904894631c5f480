//! Transaction record repository port.

use crate::domain::billing::{TransactionDraft, TransactionPatch, TransactionRecord};
use crate::domain::foundation::{ContactNumber, DomainError, Timestamp};
use async_trait::async_trait;

/// Repository port for transaction accounting.
///
/// The total amount is always `count x unit_price x discount`, computed at
/// record time and recomputed whenever an amendment touches any of those
/// three fields.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Record a transaction with a server-assigned timestamp.
    ///
    /// The referenced item code must exist in either the product or the
    /// membership plan catalog.
    ///
    /// # Errors
    ///
    /// - `InvalidReference` if the member does not exist
    /// - `ItemNotFound` if the item code matches neither catalog
    async fn record(
        &self,
        draft: &TransactionDraft,
        at: Timestamp,
    ) -> Result<TransactionRecord, DomainError>;

    /// The member's transactions, most recent first.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member does not exist
    async fn for_member(
        &self,
        contact: &ContactNumber,
    ) -> Result<Vec<TransactionRecord>, DomainError>;

    /// All transactions.
    async fn list(&self) -> Result<Vec<TransactionRecord>, DomainError>;

    /// Amend a transaction, recomputing the total when the patch touches
    /// count, unit price, or discount.
    ///
    /// # Errors
    ///
    /// - `InvalidReference` if the member does not exist
    /// - `TransactionNotFound` if the transaction does not exist
    async fn amend(
        &self,
        contact: &ContactNumber,
        id: i64,
        patch: &TransactionPatch,
    ) -> Result<TransactionRecord, DomainError>;

    /// Delete a transaction.
    ///
    /// # Errors
    ///
    /// - `InvalidReference` if the member does not exist
    /// - `TransactionNotFound` if the transaction does not exist
    async fn remove(&self, contact: &ContactNumber, id: i64) -> Result<(), DomainError>;
}
