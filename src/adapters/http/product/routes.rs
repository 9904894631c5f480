//! Axum router configuration for product endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_product, delete_product, get_product, list_products, update_product, ProductAppState,
};

/// Create the product API router.
///
/// # Routes
///
/// - `POST /` - Add a product
/// - `GET /` - List the catalog
/// - `GET /:code` - Product details
/// - `PUT /:code` - Partial update
/// - `DELETE /:code` - Remove product (history is kept)
pub fn routes() -> Router<ProductAppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:code",
            get(get_product).put(update_product).delete(delete_product),
        )
}
