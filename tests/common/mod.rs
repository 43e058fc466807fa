//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    response::Response,
    Router,
};
use axum_extra::headers::{Authorization, HeaderMapExt};
use serde_json::Value;
use tower::ServiceExt;

use rental_service::config::Settings;
use rental_service::startup::{build_router, AppState};

pub const USERNAME: &str = "rental";
pub const PASSWORD: &str = "s3cret";

/// Test application over fresh in-memory stores
pub struct TestApp {
    pub router: Router,
}

/// Status, headers and decoded body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// `Authorization: Basic ...` for the given credentials
pub fn basic_auth(username: &str, password: &str) -> HeaderValue {
    let mut headers = HeaderMap::new();
    headers.typed_insert(Authorization::basic(username, password));
    headers.remove(header::AUTHORIZATION).unwrap()
}

/// Router served with the test credentials
pub fn test_router() -> Router {
    build_router(AppState::in_memory(Settings::in_memory(USERNAME, PASSWORD)))
}

impl TestApp {
    /// Create a new test application with empty stores
    pub fn new() -> Self {
        Self {
            router: test_router(),
        }
    }

    /// Send a request, optionally with a JSON body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        auth: Option<HeaderValue>,
        body: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_owned())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        Self::decode(response).await
    }

    async fn decode(response: Response) -> TestResponse {
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Authenticated GET
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, Some(basic_auth(USERNAME, PASSWORD)), None)
            .await
    }

    /// Authenticated POST with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Method::POST,
            uri,
            Some(basic_auth(USERNAME, PASSWORD)),
            Some(body),
        )
        .await
    }

    /// Authenticated PUT with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Method::PUT,
            uri,
            Some(basic_auth(USERNAME, PASSWORD)),
            Some(body),
        )
        .await
    }

    /// Authenticated DELETE
    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, Some(basic_auth(USERNAME, PASSWORD)), None)
            .await
    }

    /// Create a car and return its id
    pub async fn create_car(&self, make: &str, model: &str, year: i32) -> i64 {
        let body = serde_json::json!({ "make": make, "model": model, "year": year });
        let response = self.post_json("/v1/car", &body.to_string()).await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"].as_i64().unwrap()
    }

    /// Create a customer and return its id
    pub async fn create_customer(&self, name: &str) -> i64 {
        let body = serde_json::json!({ "name": name });
        let response = self.post_json("/v1/customer", &body.to_string()).await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"].as_i64().unwrap()
    }
}
