//! HTTP handlers for member endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::{ContactNumber, DomainError, ErrorCode};
use crate::ports::MemberRepository;

use super::dto::{CreateMemberRequest, MemberResponse, MessageResponse, UpdateMemberRequest};

/// State for the member routes.
#[derive(Clone)]
pub struct MemberAppState {
    pub members: Arc<dyn MemberRepository>,
}

/// POST / - Register a member.
pub async fn create_member(
    State(state): State<MemberAppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let member = request.into_member(Utc::now().date_naive())?;
    state.members.create(&member).await?;
    Ok((StatusCode::CREATED, Json(MemberResponse::from(member))))
}

/// GET / - List all members.
pub async fn list_members(
    State(state): State<MemberAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let members = state.members.list().await?;
    let response: Vec<MemberResponse> = members.into_iter().map(MemberResponse::from).collect();
    Ok(Json(response))
}

/// GET /:contact - Member details.
pub async fn get_member(
    State(state): State<MemberAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    let member = state
        .members
        .find(&contact)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::MemberNotFound, "Member not found"))?;
    Ok(Json(MemberResponse::from(member)))
}

/// PUT /:contact - Partially update a member.
pub async fn update_member(
    State(state): State<MemberAppState>,
    Path(contact): Path<String>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    let patch = request.into_patch()?;
    if patch.is_empty() {
        return Ok(Json(MessageResponse::new("No fields to update")));
    }
    state.members.update(&contact, &patch).await?;
    Ok(Json(MessageResponse::new("Member updated")))
}

/// DELETE /:contact - Remove a member and everything attached to it.
pub async fn delete_member(
    State(state): State<MemberAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    state.members.delete(&contact).await?;
    Ok(Json(MessageResponse::new("Member deleted")))
}
