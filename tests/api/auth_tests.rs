//! Basic Authentication Tests

use axum::http::{header, Method, StatusCode};

use crate::common::{basic_auth, TestApp, PASSWORD, USERNAME};

#[tokio::test]
async fn test_missing_credentials_rejected_with_challenge() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/v1/car/1", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"rental\""
    );
}

#[tokio::test]
async fn test_wrong_password_rejected() {
    let app = TestApp::new();

    let response = app
        .send(
            Method::GET,
            "/v1/car/1",
            Some(basic_auth(USERNAME, "wrong")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_username_rejected() {
    let app = TestApp::new();

    let response = app
        .send(
            Method::POST,
            "/v1/customer",
            Some(basic_auth("admin", PASSWORD)),
            Some(r#"{"name":"John Doe"}"#),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rejected_request_does_not_write() {
    let app = TestApp::new();

    let response = app
        .send(
            Method::POST,
            "/v1/customer",
            None,
            Some(r#"{"name":"John Doe"}"#),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // The first authenticated create gets the first identity
    let id = app.create_customer("Jane Roe").await;
    assert_eq!(id, 1);
}

#[tokio::test]
async fn test_security_headers_on_rejection() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/v1/car/1", None, None).await;

    assert_eq!(
        response.headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
    assert_eq!(
        response.headers.get(header::X_FRAME_OPTIONS).unwrap(),
        "SAMEORIGIN"
    );
}
