//! Axum router configuration for member endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_member, delete_member, get_member, list_members, update_member, MemberAppState,
};

/// Create the member API router.
///
/// # Routes
///
/// - `POST /` - Register a member
/// - `GET /` - List all members
/// - `GET /:contact` - Member details
/// - `PUT /:contact` - Partial update
/// - `DELETE /:contact` - Remove member and dependents
pub fn routes() -> Router<MemberAppState> {
    Router::new()
        .route("/", get(list_members).post(create_member))
        .route(
            "/:contact",
            get(get_member).put(update_member).delete(delete_member),
        )
}
