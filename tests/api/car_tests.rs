//! Car API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::TestApp;

#[tokio::test]
async fn test_create_car_returns_created_car() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/v1/car",
            r#"{"make":"Toyota","model":"Corolla","year":2015}"#,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body,
        json!({"id": 1, "make": "Toyota", "model": "Corolla", "renter_id": 0, "year": 2015})
    );
}

#[tokio::test]
async fn test_get_car() {
    let app = TestApp::new();
    let id = app.create_car("Honda", "Civic", 2018).await;

    let response = app.get(&format!("/v1/car/{}", id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["make"], "Honda");
    assert_eq!(response.body["model"], "Civic");
    assert_eq!(response.body["year"], 2018);
    assert_eq!(response.body["renter_id"], 0);
}

#[tokio::test]
async fn test_get_unknown_car_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/v1/car/9999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], 10001);
}

#[tokio::test]
async fn test_non_numeric_car_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/v1/car/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_car_replaces_fields() {
    let app = TestApp::new();
    let id = app.create_car("Toyota", "Corolla", 2015).await;

    let response = app
        .put_json(
            &format!("/v1/car/{}", id),
            r#"{"make":"Toyota","model":"Camry","year":2020}"#,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"id": id, "make": "Toyota", "model": "Camry", "renter_id": 0, "year": 2020})
    );
    assert_eq!(app.get(&format!("/v1/car/{}", id)).await.body["model"], "Camry");
}

#[tokio::test]
async fn test_update_car_keeps_renter() {
    let app = TestApp::new();
    let car_id = app.create_car("Toyota", "Corolla", 2015).await;
    let customer_id = app.create_customer("John Doe").await;
    let rent = app
        .get(&format!("/v1/car/{}/rent?customer_id={}", car_id, customer_id))
        .await;
    assert_eq!(rent.status, StatusCode::NO_CONTENT);

    let response = app
        .put_json(
            &format!("/v1/car/{}", car_id),
            r#"{"make":"Toyota","model":"Corolla","year":2016}"#,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["renter_id"], customer_id);
}

#[tokio::test]
async fn test_update_unknown_car_is_not_found() {
    let app = TestApp::new();

    let response = app
        .put_json(
            "/v1/car/42",
            r#"{"make":"Toyota","model":"Corolla","year":2015}"#,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_car() {
    let app = TestApp::new();
    let id = app.create_car("Toyota", "Corolla", 2015).await;

    let response = app.delete(&format!("/v1/car/{}", id)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.get(&format!("/v1/car/{}", id)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_car_succeeds() {
    let app = TestApp::new();

    let response = app.delete("/v1/car/77").await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[test_case(r#"{"make":"Toyota","model":"Corolla""# ; "truncated json")]
#[test_case(r#"{"make":"Toyota","model":"Corolla","year":"new"}"# ; "year not a number")]
#[test_case(r#"{"make":"","model":"Corolla","year":2015}"# ; "empty make")]
#[test_case(r#"{"make":"Toyota","model":"Corolla","year":1700}"# ; "year out of range")]
#[test_case(r#"{"model":"Corolla","year":2015}"# ; "missing make")]
#[tokio::test]
async fn test_create_car_rejects_bad_body(body: &str) {
    let app = TestApp::new();

    let response = app.post_json("/v1/car", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
