//! Customer API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_create_customer_returns_created_customer() {
    let app = TestApp::new();

    let response = app.post_json("/v1/customer", r#"{"name":"John Doe"}"#).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({"id": 1, "name": "John Doe"}));
}

#[tokio::test]
async fn test_customer_ids_are_distinct() {
    let app = TestApp::new();

    let first = app.create_customer("John Doe").await;
    let second = app.create_customer("Jane Roe").await;

    assert_ne!(first, second);
    assert_ne!(first, 0);
    assert_ne!(second, 0);
}

#[tokio::test]
async fn test_get_customer() {
    let app = TestApp::new();
    let id = app.create_customer("John Doe").await;

    let response = app.get(&format!("/v1/customer/{}", id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"id": id, "name": "John Doe"}));
}

#[tokio::test]
async fn test_get_unknown_customer_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/v1/customer/9999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_customer() {
    let app = TestApp::new();
    let id = app.create_customer("John Doe").await;

    let response = app
        .put_json(&format!("/v1/customer/{}", id), r#"{"name":"John Q. Doe"}"#)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "John Q. Doe");
    assert_eq!(
        app.get(&format!("/v1/customer/{}", id)).await.body["name"],
        "John Q. Doe"
    );
}

#[tokio::test]
async fn test_update_unknown_customer_is_not_found() {
    let app = TestApp::new();

    let response = app
        .put_json("/v1/customer/5", r#"{"name":"Nobody"}"#)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_customer() {
    let app = TestApp::new();
    let id = app.create_customer("John Doe").await;

    let response = app.delete(&format!("/v1/customer/{}", id)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.get(&format!("/v1/customer/{}", id)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_customer_rejects_malformed_body() {
    let app = TestApp::new();

    let response = app.post_json("/v1/customer", "not json").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.post_json("/v1/customer", r#"{"name":""}"#).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_customer_lists_field_errors() {
    let app = TestApp::new();

    let response = app.post_json("/v1/customer", r#"{"name":""}"#).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 10007);
    assert_eq!(response.body["errors"][0]["field"], "name");
}

#[tokio::test]
async fn test_body_over_limit_is_payload_too_large() {
    let app = TestApp::new();
    let name = "a".repeat(2 * 1024 * 1024);
    let body = json!({ "name": name }).to_string();

    let response = app.post_json("/v1/customer", &body).await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["code"], 10006);

    // Nothing was stored
    let response = app.get("/v1/customer/1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
