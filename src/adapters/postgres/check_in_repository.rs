//! PostgreSQL implementation of CheckInRepository.

use crate::domain::attendance::CheckInRecord;
use crate::domain::foundation::{ContactNumber, DomainError, ErrorCode, Timestamp};
use crate::ports::CheckInRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::storage_error;

/// PostgreSQL implementation of the CheckInRepository port.
pub struct PostgresCheckInRepository {
    pool: PgPool,
}

impl PostgresCheckInRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CheckInRow {
    id: i64,
    contact_number: String,
    check_in_at: DateTime<Utc>,
    check_out_at: Option<DateTime<Utc>>,
}

impl TryFrom<CheckInRow> for CheckInRecord {
    type Error = DomainError;

    fn try_from(row: CheckInRow) -> Result<Self, Self::Error> {
        let contact_number = ContactNumber::new(row.contact_number).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid contact number in storage: {}", e),
            )
        })?;
        Ok(CheckInRecord {
            id: row.id,
            contact_number,
            check_in_at: Timestamp::from_datetime(row.check_in_at),
            check_out_at: row.check_out_at.map(Timestamp::from_datetime),
        })
    }
}

#[async_trait]
impl CheckInRepository for PostgresCheckInRepository {
    async fn open(
        &self,
        contact: &ContactNumber,
        at: Timestamp,
    ) -> Result<CheckInRecord, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("begin check-in", e))?;

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

        let open_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM check_in_records WHERE contact_number = $1 AND check_out_at IS NULL)",
        )
        .bind(contact.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| storage_error("check open record", e))?;
        if open_exists {
            return Err(DomainError::new(
                ErrorCode::OpenCheckInExists,
                "Member already has an open check-in record",
            ));
        }

        let row: CheckInRow = sqlx::query_as(
            r#"
            INSERT INTO check_in_records (contact_number, check_in_at)
            VALUES ($1, $2)
            RETURNING id, contact_number, check_in_at, check_out_at
            "#,
        )
        .bind(contact.as_str())
        .bind(at.as_datetime())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| storage_error("save check-in record", e))?;

        tx.commit()
            .await
            .map_err(|e| storage_error("commit check-in", e))?;

        tracing::info!(contact = %contact, "member checked in");
        CheckInRecord::try_from(row)
    }

    async fn close_latest(
        &self,
        contact: &ContactNumber,
        at: Timestamp,
    ) -> Result<CheckInRecord, DomainError> {
        let row: Option<CheckInRow> = sqlx::query_as(
            r#"
            UPDATE check_in_records
            SET check_out_at = $2
            WHERE id = (
                SELECT MAX(id) FROM check_in_records
                WHERE contact_number = $1 AND check_out_at IS NULL
            )
            RETURNING id, contact_number, check_in_at, check_out_at
            "#,
        )
        .bind(contact.as_str())
        .bind(at.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("save check-out", e))?;

        let row = row.ok_or_else(|| {
            DomainError::new(
                ErrorCode::CheckInNotFound,
                "No open check-in record for member",
            )
        })?;

        tracing::info!(contact = %contact, "member checked out");
        CheckInRecord::try_from(row)
    }

    async fn records_for(
        &self,
        contact: &ContactNumber,
    ) -> Result<Vec<CheckInRecord>, DomainError> {
        let rows: Vec<CheckInRow> = sqlx::query_as(
            r#"
            SELECT id, contact_number, check_in_at, check_out_at
            FROM check_in_records
            WHERE contact_number = $1
            ORDER BY check_in_at DESC
            "#,
        )
        .bind(contact.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("list member check-ins", e))?;

        rows.into_iter().map(CheckInRecord::try_from).collect()
    }

    async fn list(&self) -> Result<Vec<CheckInRecord>, DomainError> {
        let rows: Vec<CheckInRow> = sqlx::query_as(
            "SELECT id, contact_number, check_in_at, check_out_at FROM check_in_records",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("list check-ins", e))?;

        rows.into_iter().map(CheckInRecord::try_from).collect()
    }

    async fn delete_for(&self, contact: &ContactNumber) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM check_in_records WHERE contact_number = $1")
            .bind(contact.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete check-ins", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CheckInNotFound,
                "Check-in record not found",
            ));
        }

        tracing::info!(contact = %contact, removed = result.rows_affected(), "check-in records deleted");
        Ok(())
    }
}
