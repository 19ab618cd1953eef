//! Process-local product repository.
//!
//! Backs the `memory` database backend and serves as the test double for
//! handler tests. Rows live in a `BTreeMap` so listings come back in id
//! order, matching the PostgreSQL implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use catalog_core::result::AppResult;
use catalog_entity::product::{NewProduct, Product, ProductPatch};

use super::{ProductRepository, no_product_with_id, no_products};

#[derive(Debug, Default)]
struct Rows {
    last_id: i64,
    products: BTreeMap<i64, Product>,
}

/// Product repository holding rows in memory behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<Rows>,
}

impl InMemoryProductRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given rows.
    ///
    /// Ids are assigned in order starting at 1.
    pub fn with_products(products: impl IntoIterator<Item = NewProduct>) -> Self {
        let mut rows = Rows::default();
        for product in products {
            rows.last_id += 1;
            rows.products
                .insert(rows.last_id, product.into_product(rows.last_id));
        }
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.rows.read().await.products.len()
    }

    /// Whether the repository holds no products.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.products.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert_product(&self, product: &NewProduct) -> AppResult<i64> {
        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let id = rows.last_id;
        rows.products.insert(id, product.clone().into_product(id));
        debug!(product_id = id, "Inserted product");
        Ok(id)
    }

    async fn get_product_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.rows.read().await.products.get(&id).cloned())
    }

    async fn delete_product_by_id(&self, id: i64) -> AppResult<()> {
        self.rows
            .write()
            .await
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| no_product_with_id(id))
    }

    async fn update_product_by_id(&self, id: i64, product: &NewProduct) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        let existing = rows
            .products
            .get_mut(&id)
            .ok_or_else(|| no_product_with_id(id))?;
        existing.name = product.name.clone();
        existing.price = product.price;
        Ok(())
    }

    async fn patch_product_by_id(&self, id: i64, patch: &ProductPatch) -> AppResult<Product> {
        let mut rows = self.rows.write().await;
        let existing = rows
            .products
            .get_mut(&id)
            .ok_or_else(|| no_product_with_id(id))?;
        existing.apply(patch);
        Ok(existing.clone())
    }

    async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        let rows = self.rows.read().await;
        if rows.products.is_empty() {
            return Err(no_products());
        }
        Ok(rows.products.values().cloned().collect())
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}
