//! PostgreSQL implementation of TransactionRepository.

use crate::domain::billing::{PaymentMethod, TransactionDraft, TransactionPatch, TransactionRecord};
use crate::domain::catalog::ItemKind;
use crate::domain::foundation::{ContactNumber, DomainError, ErrorCode, ItemCode, Timestamp};
use crate::ports::TransactionRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::storage_error;

/// PostgreSQL implementation of the TransactionRepository port.
///
/// The item code is resolved against both catalogs at record time; the
/// stored row keeps the denormalized price, count, and total so history
/// survives catalog deletions.
pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: i64,
    contact_number: String,
    recorded_at: DateTime<Utc>,
    item_code: String,
    count: i64,
    unit_price: i64,
    discount: f64,
    total_amount: i64,
    payment_method: String,
}

impl TryFrom<TransactionRow> for TransactionRecord {
    type Error = DomainError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let contact_number = ContactNumber::new(row.contact_number).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid contact number in storage: {}", e),
            )
        })?;
        let item_code = ItemCode::new(row.item_code).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid item code in storage: {}", e),
            )
        })?;
        let payment_method = PaymentMethod::parse(&row.payment_method).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid payment method in storage: {}", e),
            )
        })?;
        Ok(TransactionRecord {
            id: row.id,
            contact_number,
            recorded_at: Timestamp::from_datetime(row.recorded_at),
            item_code,
            count: row.count,
            unit_price: row.unit_price,
            discount: row.discount,
            total_amount: row.total_amount,
            payment_method,
        })
    }
}

/// Maps the item-resolution query result onto the shared code namespace.
fn resolve_item_kind(tag: &str) -> Option<ItemKind> {
    match tag {
        "product" => Some(ItemKind::Product),
        "membership_plan" => Some(ItemKind::MembershipPlan),
        _ => None,
    }
}

const SELECT_TRANSACTION: &str = r#"
    SELECT id, contact_number, recorded_at, item_code,
           count, unit_price, discount, total_amount, payment_method
    FROM transaction_records
"#;

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn record(
        &self,
        draft: &TransactionDraft,
        at: Timestamp,
    ) -> Result<TransactionRecord, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("begin transaction record", e))?;

        let member_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM members WHERE contact_number = $1)")
                .bind(draft.contact_number.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| storage_error("check member existence", e))?;
        if !member_exists {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }

        let tag: String = sqlx::query_scalar(
            r#"
            SELECT CASE
                WHEN EXISTS (SELECT 1 FROM products WHERE item_code = $1) THEN 'product'
                WHEN EXISTS (SELECT 1 FROM membership_plans WHERE item_code = $1) THEN 'membership_plan'
                ELSE 'not_found'
            END
            "#,
        )
        .bind(draft.item_code.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| storage_error("resolve item code", e))?;
        if resolve_item_kind(&tag).is_none() {
            return Err(DomainError::new(ErrorCode::ItemNotFound, "Item not found"));
        }

        let row: TransactionRow = sqlx::query_as(
            r#"
            INSERT INTO transaction_records (
                contact_number, recorded_at, item_code,
                count, unit_price, discount, total_amount, payment_method
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, contact_number, recorded_at, item_code,
                      count, unit_price, discount, total_amount, payment_method
            "#,
        )
        .bind(draft.contact_number.as_str())
        .bind(at.as_datetime())
        .bind(draft.item_code.as_str())
        .bind(draft.count)
        .bind(draft.unit_price)
        .bind(draft.discount.as_f64())
        .bind(draft.total_amount())
        .bind(draft.payment_method.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| storage_error("save transaction record", e))?;

        tx.commit()
            .await
            .map_err(|e| storage_error("commit transaction record", e))?;

        tracing::info!(
            contact = %draft.contact_number,
            item = %draft.item_code,
            total = draft.total_amount(),
            "transaction recorded"
        );
        TransactionRecord::try_from(row)
    }

    async fn for_member(
        &self,
        contact: &ContactNumber,
    ) -> Result<Vec<TransactionRecord>, DomainError> {
        let member_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM members WHERE contact_number = $1)")
                .bind(contact.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| storage_error("check member existence", e))?;
        if !member_exists {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                "Member not found",
            ));
        }

        let rows: Vec<TransactionRow> = sqlx::query_as(&format!(
            "{} WHERE contact_number = $1 ORDER BY recorded_at DESC",
            SELECT_TRANSACTION
        ))
        .bind(contact.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("list member transactions", e))?;

        rows.into_iter().map(TransactionRecord::try_from).collect()
    }

    async fn list(&self) -> Result<Vec<TransactionRecord>, DomainError> {
        let rows: Vec<TransactionRow> = sqlx::query_as(SELECT_TRANSACTION)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("list transactions", e))?;

        rows.into_iter().map(TransactionRecord::try_from).collect()
    }

    async fn amend(
        &self,
        contact: &ContactNumber,
        id: i64,
        patch: &TransactionPatch,
    ) -> Result<TransactionRecord, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("begin transaction amendment", e))?;

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

        // The total is recomputed from the effective values in the same
        // statement, so it can never drift from count, price, and discount.
        // Rounding goes through numeric: ties round away from zero, the
        // same as the computation at record time.
        let row: Option<TransactionRow> = sqlx::query_as(
            r#"
            UPDATE transaction_records SET
                item_code = COALESCE($2, item_code),
                count = COALESCE($3, count),
                unit_price = COALESCE($4, unit_price),
                discount = COALESCE($5, discount),
                payment_method = COALESCE($6, payment_method),
                total_amount = ROUND(
                    (COALESCE($3, count) * COALESCE($4, unit_price))::numeric
                        * COALESCE($5, discount)::numeric
                )::BIGINT
            WHERE id = $1
            RETURNING id, contact_number, recorded_at, item_code,
                      count, unit_price, discount, total_amount, payment_method
            "#,
        )
        .bind(id)
        .bind(patch.item_code.as_ref().map(|c| c.as_str()))
        .bind(patch.count)
        .bind(patch.unit_price)
        .bind(patch.discount.map(|d| d.as_f64()))
        .bind(patch.payment_method.map(|m| m.as_str()))
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| storage_error("update transaction record", e))?;

        let row = row.ok_or_else(|| {
            DomainError::new(
                ErrorCode::TransactionNotFound,
                "Transaction record not found",
            )
        })?;

        tx.commit()
            .await
            .map_err(|e| storage_error("commit transaction amendment", e))?;

        tracing::info!(contact = %contact, id, "transaction amended");
        TransactionRecord::try_from(row)
    }

    async fn remove(&self, contact: &ContactNumber, id: i64) -> Result<(), DomainError> {
        let member_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM members WHERE contact_number = $1)")
                .bind(contact.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| storage_error("check member existence", e))?;
        if !member_exists {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }

        let result = sqlx::query("DELETE FROM transaction_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete transaction record", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TransactionNotFound,
                "Transaction record not found",
            ));
        }

        tracing::info!(contact = %contact, id, "transaction deleted");
        Ok(())
    }
}
