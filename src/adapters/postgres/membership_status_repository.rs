//! PostgreSQL implementation of MembershipStatusRepository.

use crate::domain::foundation::{ContactNumber, DomainError, ErrorCode};
use crate::domain::membership::{MembershipStatus, StatusPatch, StatusPeriod};
use crate::ports::MembershipStatusRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::storage_error;

/// PostgreSQL implementation of the MembershipStatusRepository port.
pub struct PostgresMembershipStatusRepository {
    pool: PgPool,
}

impl PostgresMembershipStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StatusRow {
    id: i64,
    contact_number: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_active: bool,
}

impl TryFrom<StatusRow> for MembershipStatus {
    type Error = DomainError;

    fn try_from(row: StatusRow) -> Result<Self, Self::Error> {
        let contact_number = ContactNumber::new(row.contact_number).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid contact number in storage: {}", e),
            )
        })?;
        let period = StatusPeriod::new(row.start_date, row.end_date).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid status period in storage: {}", e),
            )
        })?;
        Ok(MembershipStatus {
            id: row.id,
            contact_number,
            period,
            is_active: row.is_active,
        })
    }
}

#[async_trait]
impl MembershipStatusRepository for PostgresMembershipStatusRepository {
    async fn open(
        &self,
        contact: &ContactNumber,
        period: StatusPeriod,
        is_active: bool,
    ) -> Result<MembershipStatus, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("begin status creation", e))?;

        let member_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM members WHERE contact_number = $1)")
                .bind(contact.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| storage_error("check member existence", e))?;
        if !member_exists {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }

        let active_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM membership_statuses WHERE contact_number = $1 AND is_active)",
        )
        .bind(contact.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| storage_error("check active status", e))?;
        if active_exists {
            return Err(DomainError::new(
                ErrorCode::ActiveStatusExists,
                "Membership status already exists",
            ));
        }

        let row: StatusRow = sqlx::query_as(
            r#"
            INSERT INTO membership_statuses (contact_number, start_date, end_date, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, contact_number, start_date, end_date, is_active
            "#,
        )
        .bind(contact.as_str())
        .bind(period.start_date())
        .bind(period.end_date())
        .bind(is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| storage_error("save membership status", e))?;

        tx.commit()
            .await
            .map_err(|e| storage_error("commit status creation", e))?;

        tracing::info!(contact = %contact, "membership status opened");
        MembershipStatus::try_from(row)
    }

    async fn find_active(
        &self,
        contact: &ContactNumber,
    ) -> Result<Option<MembershipStatus>, DomainError> {
        let row: Option<StatusRow> = sqlx::query_as(
            r#"
            SELECT id, contact_number, start_date, end_date, is_active
            FROM membership_statuses
            WHERE contact_number = $1 AND is_active
            "#,
        )
        .bind(contact.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("find membership status", e))?;

        row.map(MembershipStatus::try_from).transpose()
    }

    async fn list_active(&self) -> Result<Vec<MembershipStatus>, DomainError> {
        let rows: Vec<StatusRow> = sqlx::query_as(
            r#"
            SELECT id, contact_number, start_date, end_date, is_active
            FROM membership_statuses
            WHERE is_active
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("list membership statuses", e))?;

        rows.into_iter().map(MembershipStatus::try_from).collect()
    }

    async fn update(
        &self,
        contact: &ContactNumber,
        patch: &StatusPatch,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE membership_statuses SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                is_active = COALESCE($4, is_active)
            WHERE contact_number = $1
            "#,
        )
        .bind(contact.as_str())
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(patch.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // A single-sided date change can only be validated by the
            // storage CHECK; surface it as a validation failure.
            if let sqlx::Error::Database(db_err) = &e {
                if matches!(db_err.kind(), sqlx::error::ErrorKind::CheckViolation) {
                    return DomainError::new(
                        ErrorCode::ValidationFailed,
                        "End date must exceed start date",
                    );
                }
            }
            storage_error("update membership status", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::StatusNotFound,
                "Membership status not found",
            ));
        }

        tracing::info!(contact = %contact, "membership status updated");
        Ok(())
    }

    async fn delete_for(&self, contact: &ContactNumber) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM membership_statuses WHERE contact_number = $1")
            .bind(contact.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete membership statuses", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::StatusNotFound,
                "Membership status not found",
            ));
        }

        tracing::info!(contact = %contact, removed = result.rows_affected(), "membership statuses deleted");
        Ok(())
    }
}
