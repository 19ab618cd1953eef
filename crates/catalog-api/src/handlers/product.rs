//! Product CRUD handlers.
//!
//! Each handler validates its input, makes one repository call, and maps the
//! outcome. Repository failures are replaced by a fixed per-operation message
//! so backend error text never reaches the client.

use axum::Json;
use axum::extract::State;
use tracing::{error, info};

use catalog_core::error::{AppError, ErrorKind};
use catalog_entity::product::Product;

use crate::dto::request::{PatchProductRequest, ProductRequest};
use crate::dto::response::{MessageResponse, ProductCreatedResponse};
use crate::error::ApiError;
use crate::extractors::{JsonBody, ProductId};
use crate::state::AppState;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCTS_NOT_FOUND: &str = "products not found";

/// Rewrites a repository error for the client, keeping it as the source.
fn repository_failure(err: AppError, not_found: &str, failure: &str) -> AppError {
    match err.kind {
        ErrorKind::NotFound => AppError::not_found(not_found),
        _ => AppError::with_source(ErrorKind::Internal, failure, err),
    }
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<Json<ProductCreatedResponse>, ApiError> {
    let product = req.into_new_product()?;

    let id = state
        .products
        .insert_product(&product)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Could not insert the product", e))?;

    info!(product_id = id, "Product created");
    Ok(Json(ProductCreatedResponse::new(id)))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .products
        .get_product_by_id(id)
        .await
        .map_err(|e| repository_failure(e, PRODUCT_NOT_FOUND, "could not retrieve product"))?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;

    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .products
        .delete_product_by_id(id)
        .await
        .map_err(|e| repository_failure(e, PRODUCT_NOT_FOUND, "could not delete product"))?;

    info!(product_id = id, "Product deleted");
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let product = req.into_new_product()?;

    state
        .products
        .update_product_by_id(id, &product)
        .await
        .map_err(|e| repository_failure(e, PRODUCT_NOT_FOUND, "could not update product"))?;

    info!(product_id = id, "Product updated");
    Ok(Json(MessageResponse::new("Product updated successfully")))
}

/// PATCH /products/{id}
pub async fn patch_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(req): JsonBody<PatchProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let patch = req.into_patch()?;

    let product = state
        .products
        .patch_product_by_id(id, &patch)
        .await
        .map_err(|e| repository_failure(e, PRODUCT_NOT_FOUND, "could not update product"))?;

    info!(product_id = id, "Product patched");
    Ok(Json(product))
}

/// GET /products and GET /products/list
///
/// Any repository failure, empty table included, answers 404.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.get_all_products().await.map_err(|e| {
        if !e.is(ErrorKind::NotFound) {
            error!(kind = %e.kind, error = %e.message, source = ?e.source, "Listing products failed");
        }
        AppError::with_source(ErrorKind::NotFound, PRODUCTS_NOT_FOUND, e)
    })?;

    Ok(Json(products))
}
