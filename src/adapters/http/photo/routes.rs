//! Axum router configuration for member photo endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    delete_photos, get_photo, list_photos, update_photo, upload_photo, PhotoAppState,
};

/// Create the member photo API router.
///
/// # Routes
///
/// - `POST /` - Upload a photo (multipart)
/// - `GET /` - All photos
/// - `GET /:contact` - The member's active photo (base64-embedded)
/// - `PUT /:contact` - Replace the active photo's bytes (multipart)
/// - `DELETE /:contact` - Remove the member's photos
pub fn routes() -> Router<PhotoAppState> {
    Router::new()
        .route("/", get(list_photos).post(upload_photo))
        .route(
            "/:contact",
            get(get_photo).put(update_photo).delete(delete_photos),
        )
}
