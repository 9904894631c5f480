//! HTTP handlers for transaction endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::billing::{RecordTransactionCommand, RecordTransactionHandler};
use crate::domain::foundation::{ContactNumber, DomainError, ErrorCode};
use crate::ports::TransactionRepository;

use super::dto::{
    CreateTransactionRequest, MessageResponse, TransactionResponse, UpdateTransactionRequest,
};

/// State for the transaction routes.
#[derive(Clone)]
pub struct TransactionAppState {
    pub transactions: Arc<dyn TransactionRepository>,
}

impl TransactionAppState {
    pub fn record_handler(&self) -> RecordTransactionHandler {
        RecordTransactionHandler::new(self.transactions.clone())
    }
}

/// POST / - Record a transaction.
pub async fn create_transaction(
    State(state): State<TransactionAppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = request.into_draft()?;
    let handler = state.record_handler();
    let record = handler.handle(RecordTransactionCommand { draft }).await?;
    Ok((StatusCode::CREATED, Json(TransactionResponse::from(record))))
}

/// GET / - All transactions.
pub async fn list_transactions(
    State(state): State<TransactionAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.transactions.list().await?;
    let response: Vec<TransactionResponse> =
        records.into_iter().map(TransactionResponse::from).collect();
    Ok(Json(response))
}

/// GET /member/:contact - The member's transactions, most recent first.
pub async fn get_member_transactions(
    State(state): State<TransactionAppState>,
    Path(contact): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    let records = state.transactions.for_member(&contact).await?;
    if records.is_empty() {
        return Err(DomainError::new(
            ErrorCode::TransactionNotFound,
            "No transaction records for member",
        )
        .into());
    }
    let response: Vec<TransactionResponse> =
        records.into_iter().map(TransactionResponse::from).collect();
    Ok(Json(response))
}

/// PUT /:contact/:id - Amend a transaction; the total is recomputed when
/// count, unit price, or discount changes.
pub async fn update_transaction(
    State(state): State<TransactionAppState>,
    Path((contact, id)): Path<(String, i64)>,
    Json(request): Json<UpdateTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    let patch = request.into_patch()?;
    if patch.is_empty() {
        return Err(DomainError::new(
            ErrorCode::ValidationFailed,
            "No valid fields to update",
        )
        .into());
    }
    let record = state.transactions.amend(&contact, id, &patch).await?;
    Ok(Json(TransactionResponse::from(record)))
}

/// DELETE /:contact/:id - Remove a transaction.
pub async fn delete_transaction(
    State(state): State<TransactionAppState>,
    Path((contact, id)): Path<(String, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = ContactNumber::new(contact)?;
    state.transactions.remove(&contact, id).await?;
    Ok(Json(MessageResponse::new("Transaction record deleted")))
}
