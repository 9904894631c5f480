//! Axum router configuration for check-in endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    check_in, check_out, delete_member_check_ins, get_member_check_ins, list_check_ins,
    CheckInAppState,
};

/// Create the check-in API router.
///
/// # Routes
///
/// - `POST /` - Check a member in
/// - `GET /` - All records
/// - `GET /:contact` - The member's records
/// - `PUT /:contact` - Check the member out
/// - `DELETE /:contact` - Remove the member's records
pub fn routes() -> Router<CheckInAppState> {
    Router::new()
        .route("/", get(list_check_ins).post(check_in))
        .route(
            "/:contact",
            get(get_member_check_ins)
                .put(check_out)
                .delete(delete_member_check_ins),
        )
}
