//! Health check handlers.

use axum::Json;
use axum::extract::State;

use catalog_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.products.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Health check failed");
        AppError::service_unavailable("Database unavailable")
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: "connected".to_string(),
    }))
}
