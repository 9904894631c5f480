//! HTTP handlers for membership status endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::{ContactNumber, DomainError, ErrorCode};
use crate::ports::MembershipStatusRepository;

use super::dto::{CreateStatusRequest, MessageResponse, StatusResponse, UpdateStatusRequest};

/// State for the membership status routes.
#[derive(Clone)]
pub struct StatusAppState {
    pub statuses: Arc<dyn MembershipStatusRepository>,
}

/// POST / - Open a membership status.
pub async fn create_status(
    State(state): State<StatusAppState>,
    Json(request): Json<CreateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(request.contact_number.clone())?;
    let period = request.period()?;
    let status = state
        .statuses
        .open(&contact, period, request.is_active)
        .await?;
    Ok((StatusCode::CREATED, Json(StatusResponse::from(status))))
}

/// GET / - List all active statuses.
pub async fn list_statuses(
    State(state): State<StatusAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let statuses = state.statuses.list_active().await?;
    let response: Vec<StatusResponse> = statuses.into_iter().map(StatusResponse::from).collect();
    Ok(Json(response))
}

/// GET /:contact - The member's active status.
pub async fn get_status(
    State(state): State<StatusAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    let status = state.statuses.find_active(&contact).await?.ok_or_else(|| {
        DomainError::new(ErrorCode::StatusNotFound, "Membership status not found")
    })?;
    Ok(Json(StatusResponse::from(status)))
}

/// PUT /:contact - Partially update the member's status rows.
pub async fn update_status(
    State(state): State<StatusAppState>,
    Path(contact): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    let patch = request.into_patch()?;
    if patch.is_empty() {
        return Ok(Json(MessageResponse::new("No fields to update")));
    }
    state.statuses.update(&contact, &patch).await?;
    Ok(Json(MessageResponse::new("Membership status updated")))
}

/// DELETE /:contact - Remove the member's status rows.
pub async fn delete_status(
    State(state): State<StatusAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    state.statuses.delete_for(&contact).await?;
    Ok(Json(MessageResponse::new("Membership status deleted")))
}
