//! PostgreSQL implementation of MembershipPlanRepository.

use crate::domain::foundation::{DomainError, ErrorCode, ItemCode};
use crate::domain::membership::{MembershipPlan, PlanPatch};
use crate::ports::MembershipPlanRepository;
use async_trait::async_trait;
use sqlx::PgPool;

use super::storage_error;

/// PostgreSQL implementation of the MembershipPlanRepository port.
pub struct PostgresMembershipPlanRepository {
    pool: PgPool,
}

impl PostgresMembershipPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    item_code: String,
    sale_price: i64,
    plan_type: String,
    duration_months: i32,
}

impl TryFrom<PlanRow> for MembershipPlan {
    type Error = DomainError;

    fn try_from(row: PlanRow) -> Result<Self, Self::Error> {
        let item_code = ItemCode::new(row.item_code).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid item code in storage: {}", e),
            )
        })?;
        Ok(MembershipPlan {
            item_code,
            sale_price: row.sale_price,
            plan_type: row.plan_type,
            duration_months: row.duration_months,
        })
    }
}

#[async_trait]
impl MembershipPlanRepository for PostgresMembershipPlanRepository {
    async fn create(&self, plan: &MembershipPlan) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO membership_plans (item_code, sale_price, plan_type, duration_months)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(plan.item_code.as_str())
        .bind(plan.sale_price)
        .bind(&plan.plan_type)
        .bind(plan.duration_months)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                    return DomainError::new(
                        ErrorCode::PlanExists,
                        "Membership plan already exists",
                    );
                }
            }
            storage_error("save membership plan", e)
        })?;

        tracing::info!(code = %plan.item_code, "membership plan created");
        Ok(())
    }

    async fn find(&self, code: &ItemCode) -> Result<Option<MembershipPlan>, DomainError> {
        let row: Option<PlanRow> = sqlx::query_as(
            r#"
            SELECT item_code, sale_price, plan_type, duration_months
            FROM membership_plans
            WHERE item_code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("find membership plan", e))?;

        row.map(MembershipPlan::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<MembershipPlan>, DomainError> {
        let rows: Vec<PlanRow> = sqlx::query_as(
            "SELECT item_code, sale_price, plan_type, duration_months FROM membership_plans",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("list membership plans", e))?;

        rows.into_iter().map(MembershipPlan::try_from).collect()
    }

    async fn update(&self, code: &ItemCode, patch: &PlanPatch) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE membership_plans SET
                sale_price = COALESCE($2, sale_price),
                plan_type = COALESCE($3, plan_type),
                duration_months = COALESCE($4, duration_months)
            WHERE item_code = $1
            "#,
        )
        .bind(code.as_str())
        .bind(patch.sale_price)
        .bind(patch.plan_type.as_deref())
        .bind(patch.duration_months)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("update membership plan", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PlanNotFound,
                "Membership plan not found",
            ));
        }

        Ok(())
    }

    async fn delete(&self, code: &ItemCode) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM membership_plans WHERE item_code = $1")
            .bind(code.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete membership plan", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PlanNotFound,
                "Membership plan not found",
            ));
        }

        tracing::info!(code = %code, "membership plan deleted");
        Ok(())
    }
}
