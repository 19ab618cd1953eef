//! Access log for the product API.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Logs one line per request, keyed by the route template it matched.
///
/// Server errors are raised to `warn` so they stand out next to the
/// handler's own error log.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = route_of(&request);
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    if status.is_server_error() {
        warn!(%method, route = %route, status = status.as_u16(), elapsed_ms, "Product API request failed");
    } else {
        info!(%method, route = %route, status = status.as_u16(), elapsed_ms, "Product API request");
    }

    response
}

/// `/products/7` logs as `/products/{id}`; unmatched requests keep their raw path.
fn route_of(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}
