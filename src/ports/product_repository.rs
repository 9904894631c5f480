//! Product catalog repository port.

use crate::domain::catalog::{Product, ProductPatch};
use crate::domain::foundation::{DomainError, ItemCode};
use async_trait::async_trait;

/// Repository port for the product catalog.
///
/// Deleting a product does not cascade to historical transactions;
/// transactions keep the denormalized price and count so history stays
/// readable after catalog deletion.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// - `ProductExists` if the item code is taken
    async fn create(&self, product: &Product) -> Result<(), DomainError>;

    /// Find a product by item code.
    async fn find(&self, code: &ItemCode) -> Result<Option<Product>, DomainError>;

    /// List all products.
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if no row matched
    async fn update(&self, code: &ItemCode, patch: &ProductPatch) -> Result<(), DomainError>;

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if no row matched
    async fn delete(&self, code: &ItemCode) -> Result<(), DomainError>;
}
