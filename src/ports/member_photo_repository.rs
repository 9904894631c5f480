//! Member photo repository port.

use crate::domain::foundation::{ContactNumber, DomainError};
use crate::domain::member::MemberPhoto;
use async_trait::async_trait;

/// Repository port for member photo storage.
///
/// The "one active photo per member" invariant is owned here: storing a new
/// photo deactivates the member's previous active photo in the same
/// transaction.
#[async_trait]
pub trait MemberPhotoRepository: Send + Sync {
    /// Store a new active photo, deactivating any prior active photo.
    ///
    /// # Errors
    ///
    /// - `InvalidReference` if the member does not exist
    /// - `DatabaseError` on persistence failure
    async fn store(&self, photo: &MemberPhoto) -> Result<(), DomainError>;

    /// Find the member's currently active photo. Returns `None` if the
    /// member has no active photo.
    async fn find_active(
        &self,
        contact: &ContactNumber,
    ) -> Result<Option<MemberPhoto>, DomainError>;

    /// List every stored photo, active and inactive.
    async fn list(&self) -> Result<Vec<MemberPhoto>, DomainError>;

    /// Replace the bytes of the active photo in place (same row, same name).
    ///
    /// # Errors
    ///
    /// - `PhotoNotFound` if the member has no active photo
    async fn replace_active(
        &self,
        contact: &ContactNumber,
        image: &[u8],
    ) -> Result<(), DomainError>;

    /// Remove every photo row for the member, active and inactive.
    ///
    /// # Errors
    ///
    /// - `PhotoNotFound` if the member has no photos
    async fn delete_for(&self, contact: &ContactNumber) -> Result<(), DomainError>;
}
