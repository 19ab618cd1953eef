//! Integration tests for product CRUD over the in-memory store.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = helpers::TestApp::new();

    let created = app
        .request("POST", "/products", Some(json!({"name": "X", "price": 10})))
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(
        created.body,
        json!({"id": 1, "message": "Product created successfully"})
    );

    let id = created.body["id"].as_i64().expect("id");
    let fetched = app.request("GET", &format!("/products/{id}"), None).await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.content_type.as_deref(), Some("application/json"));
    assert_eq!(fetched.body, json!({"id": id, "name": "X", "price": 10.0}));
}

#[tokio::test]
async fn test_full_lifecycle() {
    let app = helpers::TestApp::new();

    let id = app
        .request(
            "POST",
            "/products",
            Some(json!({"name": "Keyboard", "price": 49.9})),
        )
        .await
        .body["id"]
        .as_i64()
        .expect("id");

    let updated = app
        .request(
            "PUT",
            &format!("/products/{id}"),
            Some(json!({"name": "Mechanical keyboard", "price": 89.0})),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.body,
        json!({"message": "Product updated successfully"})
    );

    let patched = app
        .request(
            "PATCH",
            &format!("/products/{id}"),
            Some(json!({"price": 79.0})),
        )
        .await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(
        patched.body,
        json!({"id": id, "name": "Mechanical keyboard", "price": 79.0})
    );

    let deleted = app
        .request("DELETE", &format!("/products/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.body,
        json!({"message": "Product deleted successfully"})
    );

    let gone = app.request("GET", &format!("/products/{id}"), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(
        gone.body,
        json!({"error": "Product not found", "errorCode": 404})
    );

    let deleted_again = app
        .request("DELETE", &format!("/products/{id}"), None)
        .await;
    assert_eq!(deleted_again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_products_in_id_order() {
    let app = helpers::TestApp::with_products(&[("Product 1", 10.0), ("Product 2", 15.0)]);

    for path in ["/products", "/products/list"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body,
            json!([
                {"id": 1, "name": "Product 1", "price": 10.0},
                {"id": 2, "name": "Product 2", "price": 15.0}
            ])
        );
    }
}

#[tokio::test]
async fn test_list_on_empty_store_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/products", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({"error": "products not found", "errorCode": 404})
    );
}

#[tokio::test]
async fn test_invalid_create_leaves_store_untouched() {
    let app = helpers::TestApp::new();

    let missing_name = app
        .request("POST", "/products", Some(json!({"price": 3})))
        .await;
    assert_eq!(missing_name.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        missing_name.body,
        json!({"error": "Name is required", "errorCode": 400})
    );

    let bad_price = app
        .request("POST", "/products", Some(json!({"name": "Pen", "price": -3})))
        .await;
    assert_eq!(bad_price.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        bad_price.body,
        json!({"error": "Price must be greater than 0", "errorCode": 400})
    );

    let malformed = app
        .raw_request("POST", "/products", "{\"name\": \"Pen\", ".to_string())
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        malformed.body,
        json!({"error": "Invalid input", "errorCode": 400})
    );

    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "PUT",
            "/products/77",
            Some(json!({"name": "Ghost", "price": 1})),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({"error": "Product not found", "errorCode": 404})
    );
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = helpers::TestApp::with_products(&[("Mug", 8.0)]);

    for method in ["GET", "DELETE"] {
        let response = app.request(method, "/products/one", None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            json!({"error": "invalid product ID", "errorCode": 400})
        );
    }
    assert_eq!(app.repo.len().await, 1);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/catalog", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text, "Route not found");
}
