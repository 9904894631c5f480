//! HTTP handlers for member photo endpoints.

use std::sync::Arc;

use axum::extract::{Json, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::photo::{StoreMemberPhotoCommand, StoreMemberPhotoHandler};
use crate::domain::foundation::{ContactNumber, DomainError, ErrorCode, ValidationError};
use crate::ports::MemberPhotoRepository;

use super::dto::{MessageResponse, PhotoResponse};

/// State for the photo routes.
#[derive(Clone)]
pub struct PhotoAppState {
    pub photos: Arc<dyn MemberPhotoRepository>,
}

impl PhotoAppState {
    pub fn store_handler(&self) -> StoreMemberPhotoHandler {
        StoreMemberPhotoHandler::new(self.photos.clone())
    }
}

/// Multipart form fields for photo upload.
struct PhotoUploadForm {
    contact_number: Option<String>,
    image: Option<Vec<u8>>,
}

async fn read_upload_form(mut multipart: Multipart) -> Result<PhotoUploadForm, DomainError> {
    let mut form = PhotoUploadForm {
        contact_number: None,
        image: None,
    };
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Malformed multipart body: {}", e),
        )
    })? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("contact_number") => {
                let text = field.text().await.map_err(|e| {
                    DomainError::new(
                        ErrorCode::ValidationFailed,
                        format!("Malformed contact_number field: {}", e),
                    )
                })?;
                form.contact_number = Some(text);
            }
            Some("photo") => {
                let bytes = field.bytes().await.map_err(|e| {
                    DomainError::new(
                        ErrorCode::ValidationFailed,
                        format!("Malformed photo field: {}", e),
                    )
                })?;
                form.image = Some(bytes.to_vec());
            }
            _ => {}
        }
    }
    Ok(form)
}

fn require_image(image: Option<Vec<u8>>) -> Result<Vec<u8>, ApiError> {
    match image {
        Some(bytes) if !bytes.is_empty() => Ok(bytes),
        _ => Err(ValidationError::empty_field("photo").into()),
    }
}

/// POST / - Upload a photo (multipart: `contact_number` text field and
/// `photo` file part). Deactivates the member's previous active photo.
pub async fn upload_photo(
    State(state): State<PhotoAppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_upload_form(multipart).await?;
    let contact_number = ContactNumber::new(
        form.contact_number
            .ok_or_else(|| ValidationError::empty_field("contact_number"))?,
    )?;
    let image = require_image(form.image)?;

    let handler = state.store_handler();
    let photo = handler
        .handle(StoreMemberPhotoCommand {
            contact_number,
            image,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Member photo stored as {}",
            photo.photo_name
        ))),
    ))
}

/// GET / - All photos, active and inactive.
pub async fn list_photos(
    State(state): State<PhotoAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let photos = state.photos.list().await?;
    let response: Vec<PhotoResponse> = photos.into_iter().map(PhotoResponse::from).collect();
    Ok(Json(response))
}

/// GET /:contact - The member's active photo, base64-embedded.
pub async fn get_photo(
    State(state): State<PhotoAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    let photo = state
        .photos
        .find_active(&contact)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::PhotoNotFound, "Member photo not found"))?;
    Ok(Json(PhotoResponse::from(photo)))
}

/// PUT /:contact - Replace the bytes of the active photo in place
/// (multipart: `photo` file part).
pub async fn update_photo(
    State(state): State<PhotoAppState>,
    Path(contact): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    let form = read_upload_form(multipart).await?;
    let image = require_image(form.image)?;

    state.photos.replace_active(&contact, &image).await?;
    Ok(Json(MessageResponse::new("Member photo updated")))
}

/// DELETE /:contact - Remove all of the member's photos.
pub async fn delete_photos(
    State(state): State<PhotoAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    state.photos.delete_for(&contact).await?;
    Ok(Json(MessageResponse::new("Member photo deleted")))
}
