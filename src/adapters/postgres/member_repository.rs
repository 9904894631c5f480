//! PostgreSQL implementation of MemberRepository.

use crate::domain::foundation::{ContactNumber, DomainError, ErrorCode};
use crate::domain::member::{Member, MemberPatch};
use crate::ports::MemberRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::storage_error;

/// PostgreSQL implementation of the MemberRepository port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
/// Each write runs its checks and its mutation inside one transaction.
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Creates a new PostgresMemberRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a member.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    contact_number: String,
    name: String,
    email: String,
    date_of_birth: NaiveDate,
    emergency_name: String,
    emergency_number: String,
    balance: i64,
    reward_points: i64,
    created_on: NaiveDate,
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let contact_number = ContactNumber::new(row.contact_number).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid contact number in storage: {}", e),
            )
        })?;
        Ok(Member {
            contact_number,
            name: row.name,
            email: row.email,
            date_of_birth: row.date_of_birth,
            emergency_name: row.emergency_name,
            emergency_number: row.emergency_number,
            balance: row.balance,
            reward_points: row.reward_points,
            created_on: row.created_on,
        })
    }
}

const SELECT_MEMBER: &str = r#"
    SELECT contact_number, name, email, date_of_birth,
           emergency_name, emergency_number, balance, reward_points, created_on
    FROM members
"#;

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn create(&self, member: &Member) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("begin member creation", e))?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM members WHERE contact_number = $1)")
                .bind(member.contact_number.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| storage_error("check member existence", e))?;
        if exists {
            return Err(DomainError::new(
                ErrorCode::MemberExists,
                "Member already exists",
            ));
        }

        sqlx::query(
            r#"
            INSERT INTO members (
                contact_number, name, email, date_of_birth,
                emergency_name, emergency_number, balance, reward_points, created_on
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(member.contact_number.as_str())
        .bind(&member.name)
        .bind(&member.email)
        .bind(member.date_of_birth)
        .bind(&member.emergency_name)
        .bind(&member.emergency_number)
        .bind(member.balance)
        .bind(member.reward_points)
        .bind(member.created_on)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            // A racing insert can still hit the primary key.
            if let sqlx::Error::Database(db_err) = &e {
                if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                    return DomainError::new(ErrorCode::MemberExists, "Member already exists");
                }
            }
            storage_error("save member", e)
        })?;

        tx.commit()
            .await
            .map_err(|e| storage_error("commit member creation", e))?;

        tracing::info!(contact = %member.contact_number, "member created");
        Ok(())
    }

    async fn find(&self, contact: &ContactNumber) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> =
            sqlx::query_as(&format!("{} WHERE contact_number = $1", SELECT_MEMBER))
                .bind(contact.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| storage_error("find member", e))?;

        row.map(Member::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        let rows: Vec<MemberRow> = sqlx::query_as(SELECT_MEMBER)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("list members", e))?;

        rows.into_iter().map(Member::try_from).collect()
    }

    async fn update(
        &self,
        contact: &ContactNumber,
        patch: &MemberPatch,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE members SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                date_of_birth = COALESCE($4, date_of_birth),
                emergency_name = COALESCE($5, emergency_name),
                emergency_number = COALESCE($6, emergency_number),
                balance = COALESCE($7, balance),
                reward_points = COALESCE($8, reward_points)
            WHERE contact_number = $1
            "#,
        )
        .bind(contact.as_str())
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.date_of_birth)
        .bind(patch.emergency_name.as_deref())
        .bind(patch.emergency_number.as_deref())
        .bind(patch.balance)
        .bind(patch.reward_points)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("update member", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                "Member not found",
            ));
        }

        tracing::info!(contact = %contact, "member updated");
        Ok(())
    }

    async fn delete(&self, contact: &ContactNumber) -> Result<(), DomainError> {
        // Statuses, check-ins, transactions, and photos go with the member
        // via the schema's ON DELETE CASCADE rules.
        let result = sqlx::query("DELETE FROM members WHERE contact_number = $1")
            .bind(contact.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete member", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                "Member not found",
            ));
        }

        tracing::info!(contact = %contact, "member deleted");
        Ok(())
    }
}
