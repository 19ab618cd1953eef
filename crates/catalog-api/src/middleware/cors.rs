//! CORS layer for browser clients of the catalog.

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use catalog_core::config::CorsConfig;

/// Builds the CORS layer from `[server.cors]`.
///
/// `"*"` allows any origin or header. Entries that do not parse are skipped.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if is_wildcard(&config.allowed_origins) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_all::<HeaderValue>(&config.allowed_origins))
    };

    let headers = if is_wildcard(&config.allowed_headers) {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(parse_all::<HeaderName>(&config.allowed_headers))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(parse_all::<Method>(&config.allowed_methods))
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn is_wildcard(entries: &[String]) -> bool {
    entries.iter().any(|entry| entry == "*")
}

fn parse_all<T: FromStr>(entries: &[String]) -> Vec<T> {
    entries.iter().filter_map(|entry| entry.parse().ok()).collect()
}
