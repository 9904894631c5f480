//! PostgreSQL implementation of MemberPhotoRepository.

use crate::domain::foundation::{ContactNumber, DomainError, ErrorCode};
use crate::domain::member::MemberPhoto;
use crate::ports::MemberPhotoRepository;
use async_trait::async_trait;
use sqlx::PgPool;

use super::storage_error;

/// PostgreSQL implementation of the MemberPhotoRepository port.
///
/// Storing a new photo deactivates the prior active photo inside the same
/// transaction, so the one-active-photo invariant holds at every commit.
pub struct PostgresMemberPhotoRepository {
    pool: PgPool,
}

impl PostgresMemberPhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PhotoRow {
    photo_name: String,
    image: Vec<u8>,
    contact_number: String,
    is_active: bool,
}

impl TryFrom<PhotoRow> for MemberPhoto {
    type Error = DomainError;

    fn try_from(row: PhotoRow) -> Result<Self, Self::Error> {
        let contact_number = ContactNumber::new(row.contact_number).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid contact number in storage: {}", e),
            )
        })?;
        Ok(MemberPhoto {
            photo_name: row.photo_name,
            image: row.image,
            contact_number,
            is_active: row.is_active,
        })
    }
}

#[async_trait]
impl MemberPhotoRepository for PostgresMemberPhotoRepository {
    async fn store(&self, photo: &MemberPhoto) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("begin photo upload", e))?;

        let member_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM members WHERE contact_number = $1)")
                .bind(photo.contact_number.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| storage_error("check member existence", e))?;
        if !member_exists {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }

        sqlx::query("UPDATE member_photos SET is_active = FALSE WHERE contact_number = $1")
            .bind(photo.contact_number.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error("deactivate previous photo", e))?;

        sqlx::query(
            r#"
            INSERT INTO member_photos (photo_name, image, contact_number, is_active)
            VALUES ($1, $2, $3, TRUE)
            "#,
        )
        .bind(&photo.photo_name)
        .bind(&photo.image)
        .bind(photo.contact_number.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| storage_error("save photo", e))?;

        tx.commit()
            .await
            .map_err(|e| storage_error("commit photo upload", e))?;

        tracing::info!(contact = %photo.contact_number, name = %photo.photo_name, "photo stored");
        Ok(())
    }

    async fn find_active(
        &self,
        contact: &ContactNumber,
    ) -> Result<Option<MemberPhoto>, DomainError> {
        let row: Option<PhotoRow> = sqlx::query_as(
            r#"
            SELECT photo_name, image, contact_number, is_active
            FROM member_photos
            WHERE contact_number = $1 AND is_active
            "#,
        )
        .bind(contact.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("find photo", e))?;

        row.map(MemberPhoto::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<MemberPhoto>, DomainError> {
        let rows: Vec<PhotoRow> = sqlx::query_as(
            "SELECT photo_name, image, contact_number, is_active FROM member_photos",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("list photos", e))?;

        rows.into_iter().map(MemberPhoto::try_from).collect()
    }

    async fn replace_active(
        &self,
        contact: &ContactNumber,
        image: &[u8],
    ) -> Result<(), DomainError> {
        // Replaces the bytes in place; the row keeps its name rather than
        // growing a new historical version.
        let result =
            sqlx::query("UPDATE member_photos SET image = $2 WHERE contact_number = $1 AND is_active")
                .bind(contact.as_str())
                .bind(image)
                .execute(&self.pool)
                .await
                .map_err(|e| storage_error("replace photo", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PhotoNotFound,
                "Member photo not found",
            ));
        }

        Ok(())
    }

    async fn delete_for(&self, contact: &ContactNumber) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM member_photos WHERE contact_number = $1")
            .bind(contact.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete photos", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PhotoNotFound,
                "Member photo not found",
            ));
        }

        tracing::info!(contact = %contact, removed = result.rows_affected(), "photos deleted");
        Ok(())
    }
}
