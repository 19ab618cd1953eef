//! PostgreSQL product repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, warn};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_entity::product::{NewProduct, Product, ProductPatch};

use super::{ProductRepository, no_product_with_id, no_products};

/// Product repository backed by the `products` table.
///
/// `price` may be stored as `NUMERIC` or `DOUBLE PRECISION`; reads cast it
/// to `FLOAT8` so it always decodes as `f64`.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert_product(&self, product: &NewProduct) -> AppResult<i64> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id")
                .bind(&product.name)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "could not insert product", e)
                })?;

        debug!(product_id = id, "Inserted product");
        Ok(id)
    }

    async fn get_product_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT id, name, price::FLOAT8 AS price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "could not retrieve product", e)
            })
    }

    async fn delete_product_by_id(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "could not delete product", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(no_product_with_id(id));
        }

        debug!(product_id = id, "Deleted product");
        Ok(())
    }

    async fn update_product_by_id(&self, id: i64, product: &NewProduct) -> AppResult<()> {
        let result = sqlx::query("UPDATE products SET name = $1, price = $2 WHERE id = $3")
            .bind(&product.name)
            .bind(product.price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "could not update product", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(no_product_with_id(id));
        }

        debug!(product_id = id, "Updated product");
        Ok(())
    }

    async fn patch_product_by_id(&self, id: i64, patch: &ProductPatch) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = COALESCE($1, name), price = COALESCE($2, price) \
             WHERE id = $3 RETURNING id, name, price::FLOAT8 AS price",
        )
        .bind(patch.name.as_deref())
        .bind(patch.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "could not update product", e))?
        .ok_or_else(|| no_product_with_id(id))
    }

    async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, price::FLOAT8 AS price FROM products ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "could not list products", e))?;

        // A row that fails to decode is dropped; the rest of the listing stands.
        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            match Product::from_row(row) {
                Ok(product) => products.push(product),
                Err(e) => warn!(error = %e, "Skipping product row that failed to decode"),
            }
        }

        if products.is_empty() {
            return Err(no_products());
        }
        Ok(products)
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
