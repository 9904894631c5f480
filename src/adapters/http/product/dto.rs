//! HTTP DTOs for product endpoints.
//!
//! Product images travel as base64 strings inside the JSON body.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Product, ProductPatch};
use crate::domain::foundation::{ItemCode, ValidationError};

/// Request to create a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub item_code: String,
    pub sale_price: i64,
    pub name: String,
    /// Base64-encoded image bytes.
    #[serde(default)]
    pub image: Option<String>,
}

impl CreateProductRequest {
    pub fn into_product(self) -> Result<Product, ValidationError> {
        let item_code = ItemCode::new(self.item_code)?;
        let image = self.image.map(|s| decode_image(&s)).transpose()?;
        Product::new(item_code, self.sale_price, self.name, image)
    }
}

/// Request to update a product; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub sale_price: Option<i64>,
    pub name: Option<String>,
    /// Base64-encoded image bytes.
    pub image: Option<String>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> Result<ProductPatch, ValidationError> {
        let image = self.image.map(|s| decode_image(&s)).transpose()?;
        let patch = ProductPatch {
            sale_price: self.sale_price,
            name: self.name,
            image,
        };
        patch.validate()?;
        Ok(patch)
    }
}

/// Product details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub item_code: String,
    pub sale_price: i64,
    pub name: String,
    /// Base64-encoded image bytes, when an image is stored.
    pub image: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            item_code: product.item_code.to_string(),
            sale_price: product.sale_price,
            name: product.name,
            image: product.image.map(|bytes| BASE64.encode(bytes)),
        }
    }
}

/// Result message for update/delete operations.
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

fn decode_image(encoded: &str) -> Result<Vec<u8>, ValidationError> {
    BASE64
        .decode(encoded)
        .map_err(|e| ValidationError::invalid_format("image", e.to_string()))
}
