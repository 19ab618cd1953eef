//! Integration tests for the health endpoint.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_with_memory_backend() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}
