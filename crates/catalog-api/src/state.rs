//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_database::ProductRepository;

/// Application state passed to every handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks. The
/// repository is held as a trait object so the server can run against
/// PostgreSQL or the in-memory store, and tests can inject doubles.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Product storage
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    /// Creates the state from configuration and a repository.
    pub fn new(config: AppConfig, products: Arc<dyn ProductRepository>) -> Self {
        Self {
            config: Arc::new(config),
            products,
        }
    }
}
