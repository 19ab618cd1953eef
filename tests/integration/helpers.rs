//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use catalog_api::AppState;
use catalog_core::config::AppConfig;
use catalog_database::{InMemoryProductRepository, ProductRepository};
use catalog_entity::product::NewProduct;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Repository behind the router, for direct inspection
    pub repo: Arc<InMemoryProductRepository>,
}

impl TestApp {
    /// Create a test application over an empty in-memory store
    pub fn new() -> Self {
        Self::with_repository(InMemoryProductRepository::new())
    }

    /// Create a test application seeded with the given products
    pub fn with_products(products: &[(&str, f64)]) -> Self {
        Self::with_repository(InMemoryProductRepository::with_products(
            products.iter().map(|(name, price)| NewProduct {
                name: name.to_string(),
                price: *price,
            }),
        ))
    }

    fn with_repository(repo: InMemoryProductRepository) -> Self {
        let repo = Arc::new(repo);
        let products: Arc<dyn ProductRepository> = repo.clone();
        let config = AppConfig::from_toml_str(
            r#"
            [database]
            backend = "memory"
            "#,
        )
        .expect("Failed to parse test config");

        let router = catalog_api::build_app(AppState::new(config, products));
        Self { router, repo }
    }

    /// Make an HTTP request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a verbatim body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            content_type,
            body,
            text,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header, if any
    pub content_type: Option<String>,
    /// Parsed JSON body (`Null` when the body is not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}
