//! HTTP handlers for check-in endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::attendance::{
    CheckInMemberCommand, CheckInMemberHandler, CheckOutMemberCommand, CheckOutMemberHandler,
};
use crate::domain::foundation::ContactNumber;
use crate::ports::CheckInRepository;

use super::dto::{CheckInRequest, CheckInResponse, MessageResponse};

/// State for the check-in routes.
#[derive(Clone)]
pub struct CheckInAppState {
    pub check_ins: Arc<dyn CheckInRepository>,
}

impl CheckInAppState {
    /// Create handlers on demand from the shared state.
    pub fn check_in_handler(&self) -> CheckInMemberHandler {
        CheckInMemberHandler::new(self.check_ins.clone())
    }

    pub fn check_out_handler(&self) -> CheckOutMemberHandler {
        CheckOutMemberHandler::new(self.check_ins.clone())
    }
}

/// POST / - Check a member in.
pub async fn check_in(
    State(state): State<CheckInAppState>,
    Json(request): Json<CheckInRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let contact_number = ContactNumber::new(request.contact_number)?;
    let handler = state.check_in_handler();
    let record = handler.handle(CheckInMemberCommand { contact_number }).await?;
    Ok((StatusCode::CREATED, Json(CheckInResponse::from(record))))
}

/// PUT /:contact - Check a member out (closes the latest open record).
pub async fn check_out(
    State(state): State<CheckInAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact_number = ContactNumber::new(contact)?;
    let handler = state.check_out_handler();
    let record = handler
        .handle(CheckOutMemberCommand { contact_number })
        .await?;
    Ok(Json(CheckInResponse::from(record)))
}

/// GET / - All check-in records.
pub async fn list_check_ins(
    State(state): State<CheckInAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.check_ins.list().await?;
    let response: Vec<CheckInResponse> = records.into_iter().map(CheckInResponse::from).collect();
    Ok(Json(response))
}

/// GET /:contact - The member's records, most recent first.
pub async fn get_member_check_ins(
    State(state): State<CheckInAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    let records = state.check_ins.records_for(&contact).await?;
    let response: Vec<CheckInResponse> = records.into_iter().map(CheckInResponse::from).collect();
    Ok(Json(response))
}

/// DELETE /:contact - Remove all of the member's records.
pub async fn delete_member_check_ins(
    State(state): State<CheckInAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    state.check_ins.delete_for(&contact).await?;
    Ok(Json(MessageResponse::new("Check-in records deleted")))
}
