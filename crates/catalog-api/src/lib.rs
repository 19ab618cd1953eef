//! # catalog-api
//!
//! HTTP API layer for the product catalog built on Axum.
//!
//! Handlers decode and validate requests, dispatch to a
//! [`ProductRepository`](catalog_database::ProductRepository), and map the
//! outcome to a status code plus JSON body. Every error leaves through the
//! `{ "error", "errorCode" }` envelope in [`error`].

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::RequestError;
pub use state::AppState;

#[cfg(test)]
mod test_support;
