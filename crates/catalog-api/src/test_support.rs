//! Test double for the product repository.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use catalog_core::result::AppResult;
use catalog_database::ProductRepository;
use catalog_entity::product::{NewProduct, Product, ProductPatch};

/// Repository whose every operation returns a canned outcome.
///
/// Operations left as `None` panic when called, so a test fails loudly if a
/// handler reaches a method it should not.
#[derive(Debug, Default)]
pub struct StubProductRepository {
    pub insert: Option<AppResult<i64>>,
    pub get: Option<AppResult<Option<Product>>>,
    pub delete: Option<AppResult<()>>,
    pub update: Option<AppResult<()>>,
    pub patch: Option<AppResult<Product>>,
    pub list: Option<AppResult<Vec<Product>>>,
    pub health: Option<AppResult<()>>,
    pub(crate) calls: AtomicUsize,
}

impl StubProductRepository {
    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer<T: Clone>(&self, outcome: &Option<AppResult<T>>, operation: &str) -> AppResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        outcome
            .clone()
            .unwrap_or_else(|| panic!("unexpected {operation} call"))
    }
}

#[async_trait]
impl ProductRepository for StubProductRepository {
    async fn insert_product(&self, _product: &NewProduct) -> AppResult<i64> {
        self.answer(&self.insert, "insert_product")
    }

    async fn get_product_by_id(&self, _id: i64) -> AppResult<Option<Product>> {
        self.answer(&self.get, "get_product_by_id")
    }

    async fn delete_product_by_id(&self, _id: i64) -> AppResult<()> {
        self.answer(&self.delete, "delete_product_by_id")
    }

    async fn update_product_by_id(&self, _id: i64, _product: &NewProduct) -> AppResult<()> {
        self.answer(&self.update, "update_product_by_id")
    }

    async fn patch_product_by_id(&self, _id: i64, _patch: &ProductPatch) -> AppResult<Product> {
        self.answer(&self.patch, "patch_product_by_id")
    }

    async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        self.answer(&self.list, "get_all_products")
    }

    async fn health_check(&self) -> AppResult<()> {
        self.answer(&self.health, "health_check")
    }
}
