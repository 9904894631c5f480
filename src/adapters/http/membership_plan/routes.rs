//! Axum router configuration for membership plan endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_plan, delete_plan, get_plan, list_plans, update_plan, PlanAppState,
};

/// Create the membership plan API router.
///
/// # Routes
///
/// - `POST /` - Add a plan
/// - `GET /` - List plans
/// - `GET /:code` - Plan details
/// - `PUT /:code` - Partial update
/// - `DELETE /:code` - Remove plan (history is kept)
pub fn routes() -> Router<PlanAppState> {
    Router::new()
        .route("/", get(list_plans).post(create_plan))
        .route("/:code", get(get_plan).put(update_plan).delete(delete_plan))
}
