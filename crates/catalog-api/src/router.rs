//! Route definitions for the product catalog HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Unmatched paths fall through to a plain-text 404.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route and the fallback, without middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(product_routes())
        .merge(health_routes())
        .fallback(handlers::fallback::route_not_found)
        .with_state(state)
}

/// Product CRUD
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route("/products/list", get(handlers::product::list_products))
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .patch(handlers::product::patch_product)
                .delete(handlers::product::delete_product),
        )
}

/// Liveness and database connectivity
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
