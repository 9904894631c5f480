//! PostgreSQL implementation of ProductRepository.

use crate::domain::catalog::{Product, ProductPatch};
use crate::domain::foundation::{DomainError, ErrorCode, ItemCode};
use crate::ports::ProductRepository;
use async_trait::async_trait;
use sqlx::PgPool;

use super::storage_error;

/// PostgreSQL implementation of the ProductRepository port.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    item_code: String,
    sale_price: i64,
    name: String,
    image: Option<Vec<u8>>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let item_code = ItemCode::new(row.item_code).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid item code in storage: {}", e),
            )
        })?;
        Ok(Product {
            item_code,
            sale_price: row.sale_price,
            name: row.name,
            image: row.image,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: &Product) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO products (item_code, sale_price, name, image)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(product.item_code.as_str())
        .bind(product.sale_price)
        .bind(&product.name)
        .bind(product.image.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                    return DomainError::new(ErrorCode::ProductExists, "Product already exists");
                }
            }
            storage_error("save product", e)
        })?;

        tracing::info!(code = %product.item_code, "product created");
        Ok(())
    }

    async fn find(&self, code: &ItemCode) -> Result<Option<Product>, DomainError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT item_code, sale_price, name, image FROM products WHERE item_code = $1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("find product", e))?;

        row.map(Product::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as("SELECT item_code, sale_price, name, image FROM products")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| storage_error("list products", e))?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn update(&self, code: &ItemCode, patch: &ProductPatch) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                sale_price = COALESCE($2, sale_price),
                name = COALESCE($3, name),
                image = COALESCE($4, image)
            WHERE item_code = $1
            "#,
        )
        .bind(code.as_str())
        .bind(patch.sale_price)
        .bind(patch.name.as_deref())
        .bind(patch.image.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("update product", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                "Product not found",
            ));
        }

        Ok(())
    }

    async fn delete(&self, code: &ItemCode) -> Result<(), DomainError> {
        // Historical transactions keep their denormalized price and count,
        // so no cascade applies here.
        let result = sqlx::query("DELETE FROM products WHERE item_code = $1")
            .bind(code.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete product", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                "Product not found",
            ));
        }

        tracing::info!(code = %code, "product deleted");
        Ok(())
    }
}
