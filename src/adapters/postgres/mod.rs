//! PostgreSQL implementations of the repository ports.

mod check_in_repository;
mod member_photo_repository;
mod member_repository;
mod membership_plan_repository;
mod membership_status_repository;
mod product_repository;
mod transaction_repository;

pub use check_in_repository::PostgresCheckInRepository;
pub use member_photo_repository::PostgresMemberPhotoRepository;
pub use member_repository::PostgresMemberRepository;
pub use membership_plan_repository::PostgresMembershipPlanRepository;
pub use membership_status_repository::PostgresMembershipStatusRepository;
pub use product_repository::PostgresProductRepository;
pub use transaction_repository::PostgresTransactionRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Build the shared connection pool from configuration.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
}

/// Fold a storage failure into the uniform domain error.
pub(crate) fn storage_error(action: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "failed to {}", action);
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {}: {}", action, err),
    )
}
