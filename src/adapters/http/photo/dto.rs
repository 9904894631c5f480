//! HTTP DTOs for member photo endpoints.
//!
//! Uploads arrive as multipart form data; retrieval embeds the image
//! bytes base64-encoded in the JSON response.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use crate::domain::member::MemberPhoto;

/// Photo details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub photo_name: String,
    pub contact_number: String,
    pub is_active: bool,
    /// Base64-encoded image bytes.
    pub image: String,
}

impl From<MemberPhoto> for PhotoResponse {
    fn from(photo: MemberPhoto) -> Self {
        Self {
            photo_name: photo.photo_name,
            contact_number: photo.contact_number.to_string(),
            is_active: photo.is_active,
            image: BASE64.encode(photo.image),
        }
    }
}

/// Result message for upload/update/delete operations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
