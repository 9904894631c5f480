//! HTTP handlers for product endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::{DomainError, ErrorCode, ItemCode};
use crate::ports::ProductRepository;

use super::dto::{CreateProductRequest, MessageResponse, ProductResponse, UpdateProductRequest};

/// State for the product routes.
#[derive(Clone)]
pub struct ProductAppState {
    pub products: Arc<dyn ProductRepository>,
}

/// POST / - Add a product to the catalog.
pub async fn create_product(
    State(state): State<ProductAppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product = request.into_product()?;
    state.products.create(&product).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// GET / - List the catalog.
pub async fn list_products(
    State(state): State<ProductAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state.products.list().await?;
    let response: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(response))
}

/// GET /:code - Product details.
pub async fn get_product(
    State(state): State<ProductAppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let code = ItemCode::new(code)?;
    let product = state
        .products
        .find(&code)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::ProductNotFound, "Product not found"))?;
    Ok(Json(ProductResponse::from(product)))
}

/// PUT /:code - Partially update a product.
pub async fn update_product(
    State(state): State<ProductAppState>,
    Path(code): Path<String>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let code = ItemCode::new(code)?;
    let patch = request.into_patch()?;
    if patch.is_empty() {
        return Ok(Json(MessageResponse::new("No fields to update")));
    }
    state.products.update(&code, &patch).await?;
    Ok(Json(MessageResponse::new("Product updated")))
}

/// DELETE /:code - Remove a product. Historical transactions are kept.
pub async fn delete_product(
    State(state): State<ProductAppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let code = ItemCode::new(code)?;
    state.products.delete(&code).await?;
    Ok(Json(MessageResponse::new("Product deleted")))
}
