//! Product catalog server.
//!
//! Main entry point that loads configuration, picks the repository backend,
//! and serves the HTTP API until a shutdown signal arrives.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use catalog_api::AppState;
use catalog_core::config::{AppConfig, DatabaseBackend};
use catalog_core::error::AppError;
use catalog_database::{
    DatabasePool, InMemoryProductRepository, PgProductRepository, ProductRepository,
};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CATALOG_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting product catalog v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Repository backend ───────────────────────────────
    tracing::info!(backend = %config.database.backend, "Initializing product repository");
    let (products, db_pool): (Arc<dyn ProductRepository>, Option<DatabasePool>) =
        match config.database.backend {
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::connect(&config.database).await?;
                let repo: Arc<dyn ProductRepository> =
                    Arc::new(PgProductRepository::new(pool.pool().clone()));
                (repo, Some(pool))
            }
            DatabaseBackend::Memory => {
                tracing::warn!("Using in-memory product store; data is lost on shutdown");
                let repo: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
                (repo, None)
            }
        };

    // ── Step 2: Build and start HTTP server ──────────────────────
    let addr = config.server.bind_address();
    let app = catalog_api::build_app(AppState::new(config, products));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Product catalog listening on {}", addr);

    // ── Step 3: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(pool) = db_pool {
        pool.close().await;
    }

    tracing::info!("Product catalog shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
