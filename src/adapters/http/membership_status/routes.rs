//! Axum router configuration for membership status endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_status, delete_status, get_status, list_statuses, update_status, StatusAppState,
};

/// Create the membership status API router.
///
/// # Routes
///
/// - `POST /` - Open a status for a member
/// - `GET /` - List active statuses
/// - `GET /:contact` - The member's active status
/// - `PUT /:contact` - Partial update of the member's status rows
/// - `DELETE /:contact` - Remove the member's status rows
pub fn routes() -> Router<StatusAppState> {
    Router::new()
        .route("/", get(list_statuses).post(create_status))
        .route(
            "/:contact",
            get(get_status).put(update_status).delete(delete_status),
        )
}
