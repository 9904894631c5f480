//! HTTP adapters: DTOs, handlers, and routes per resource, plus the
//! top-level router assembly.

pub mod check_in;
pub mod error;
pub mod member;
pub mod membership_plan;
pub mod membership_status;
pub mod photo;
pub mod product;
pub mod transaction;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use sqlx::PgPool;

use crate::adapters::postgres::{
    PostgresCheckInRepository, PostgresMemberPhotoRepository, PostgresMemberRepository,
    PostgresMembershipPlanRepository, PostgresMembershipStatusRepository,
    PostgresProductRepository, PostgresTransactionRepository,
};
use crate::ports::{
    CheckInRepository, MemberPhotoRepository, MemberRepository, MembershipPlanRepository,
    MembershipStatusRepository, ProductRepository, TransactionRepository,
};

/// All port implementations the HTTP surface depends on.
///
/// Cloned per request; every field is an Arc-wrapped trait object so tests
/// can swap in mocks module by module.
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberRepository>,
    pub photos: Arc<dyn MemberPhotoRepository>,
    pub statuses: Arc<dyn MembershipStatusRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub plans: Arc<dyn MembershipPlanRepository>,
    pub check_ins: Arc<dyn CheckInRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
}

impl AppState {
    /// Wire every repository to the shared PostgreSQL pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            members: Arc::new(PostgresMemberRepository::new(pool.clone())),
            photos: Arc::new(PostgresMemberPhotoRepository::new(pool.clone())),
            statuses: Arc::new(PostgresMembershipStatusRepository::new(pool.clone())),
            products: Arc::new(PostgresProductRepository::new(pool.clone())),
            plans: Arc::new(PostgresMembershipPlanRepository::new(pool.clone())),
            check_ins: Arc::new(PostgresCheckInRepository::new(pool.clone())),
            transactions: Arc::new(PostgresTransactionRepository::new(pool)),
        }
    }
}

/// Assemble the complete API router.
///
/// Each resource module owns its routes and a narrow state of just the
/// ports it uses; this function wires them together under `/api`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .nest(
            "/api/members",
            member::routes().with_state(member::MemberAppState {
                members: state.members.clone(),
            }),
        )
        .nest(
            "/api/member_photos",
            photo::routes().with_state(photo::PhotoAppState {
                photos: state.photos.clone(),
            }),
        )
        .nest(
            "/api/membership_status",
            membership_status::routes().with_state(membership_status::StatusAppState {
                statuses: state.statuses.clone(),
            }),
        )
        .nest(
            "/api/membership_plans",
            membership_plan::routes().with_state(membership_plan::PlanAppState {
                plans: state.plans.clone(),
            }),
        )
        .nest(
            "/api/products",
            product::routes().with_state(product::ProductAppState {
                products: state.products.clone(),
            }),
        )
        .nest(
            "/api/check_in_records",
            check_in::routes().with_state(check_in::CheckInAppState {
                check_ins: state.check_ins.clone(),
            }),
        )
        .nest(
            "/api/transaction_records",
            transaction::routes().with_state(transaction::TransactionAppState {
                transactions: state.transactions.clone(),
            }),
        )
}

/// GET / - Welcome message.
async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the FITOPIA gym back office"
    }))
}

/// GET /health - Liveness probe.
async fn health() -> &'static str {
    "ok"
}
