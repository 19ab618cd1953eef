//! The product storage contract and its implementations.

pub mod memory;
pub mod product;

use async_trait::async_trait;

use catalog_core::result::AppResult;
use catalog_entity::product::{NewProduct, Product, ProductPatch};

pub use memory::InMemoryProductRepository;
pub use product::PgProductRepository;

/// Storage contract for product rows.
///
/// Each method is a single independent round trip against the store.
/// Absence on lookup is `Ok(None)`; a write that matches no row fails with
/// `ErrorKind::NotFound`; anything else the store reports is
/// `ErrorKind::Database`.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product and return its assigned id.
    ///
    /// Callers validate the payload first; the repository does not.
    async fn insert_product(&self, product: &NewProduct) -> AppResult<i64>;

    /// Look up a product by id.
    async fn get_product_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// Delete a product by id.
    async fn delete_product_by_id(&self, id: i64) -> AppResult<()>;

    /// Overwrite both name and price of an existing product.
    async fn update_product_by_id(&self, id: i64, product: &NewProduct) -> AppResult<()>;

    /// Apply only the fields present in `patch` and return the updated row.
    async fn patch_product_by_id(&self, id: i64, patch: &ProductPatch) -> AppResult<Product>;

    /// Return every product ordered by id.
    ///
    /// An empty table is reported as `ErrorKind::NotFound`, not as an empty
    /// list.
    async fn get_all_products(&self) -> AppResult<Vec<Product>>;

    /// Verify that the backing store is reachable.
    async fn health_check(&self) -> AppResult<()>;
}

pub(crate) fn no_product_with_id(id: i64) -> catalog_core::AppError {
    catalog_core::AppError::not_found(format!("no product found with ID {id}"))
}

pub(crate) fn no_products() -> catalog_core::AppError {
    catalog_core::AppError::not_found("no products found")
}
