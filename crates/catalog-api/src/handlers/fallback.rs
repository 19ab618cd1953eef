//! Handler for requests that match no route.

use axum::http::StatusCode;

/// Any unmatched path.
pub async fn route_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Route not found")
}
