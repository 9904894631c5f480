//! HTTP handlers for membership plan endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::{DomainError, ErrorCode, ItemCode};
use crate::ports::MembershipPlanRepository;

use super::dto::{CreatePlanRequest, MessageResponse, PlanResponse, UpdatePlanRequest};

/// State for the membership plan routes.
#[derive(Clone)]
pub struct PlanAppState {
    pub plans: Arc<dyn MembershipPlanRepository>,
}

/// POST / - Add a membership plan.
pub async fn create_plan(
    State(state): State<PlanAppState>,
    Json(request): Json<CreatePlanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let plan = request.into_plan()?;
    state.plans.create(&plan).await?;
    Ok((StatusCode::CREATED, Json(PlanResponse::from(plan))))
}

/// GET / - List all plans.
pub async fn list_plans(
    State(state): State<PlanAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let plans = state.plans.list().await?;
    let response: Vec<PlanResponse> = plans.into_iter().map(PlanResponse::from).collect();
    Ok(Json(response))
}

/// GET /:code - Plan details.
pub async fn get_plan(
    State(state): State<PlanAppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let code = ItemCode::new(code)?;
    let plan = state
        .plans
        .find(&code)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::PlanNotFound, "Membership plan not found"))?;
    Ok(Json(PlanResponse::from(plan)))
}

/// PUT /:code - Partially update a plan.
pub async fn update_plan(
    State(state): State<PlanAppState>,
    Path(code): Path<String>,
    Json(request): Json<UpdatePlanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let code = ItemCode::new(code)?;
    let patch = request.into_patch()?;
    if patch.is_empty() {
        return Ok(Json(MessageResponse::new("No fields to update")));
    }
    state.plans.update(&code, &patch).await?;
    Ok(Json(MessageResponse::new("Membership plan updated")))
}

/// DELETE /:code - Remove a plan. Historical transactions are kept.
pub async fn delete_plan(
    State(state): State<PlanAppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let code = ItemCode::new(code)?;
    state.plans.delete(&code).await?;
    Ok(Json(MessageResponse::new("Membership plan deleted")))
}
