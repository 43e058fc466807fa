//! Rental API Tests

use std::sync::Arc;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::TestApp;

#[tokio::test]
async fn test_rent_car_sets_renter() {
    let app = TestApp::new();
    let car_id = app.create_car("Toyota", "Corolla", 2015).await;
    let customer_id = app.create_customer("John Doe").await;

    let response = app
        .get(&format!("/v1/car/{}/rent?customer_id={}", car_id, customer_id))
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let car = app.get(&format!("/v1/car/{}", car_id)).await;
    assert_eq!(car.body["renter_id"], customer_id);
}

#[tokio::test]
async fn test_rent_accepts_post() {
    let app = TestApp::new();
    let car_id = app.create_car("Toyota", "Corolla", 2015).await;
    let customer_id = app.create_customer("John Doe").await;

    let response = app
        .post_json(
            &format!("/v1/car/{}/rent?customer_id={}", car_id, customer_id),
            "{}",
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_rent_rented_car_is_forbidden() {
    let app = TestApp::new();
    let car_id = app.create_car("Toyota", "Corolla", 2015).await;
    let first = app.create_customer("John Doe").await;
    let second = app.create_customer("Jane Roe").await;
    app.get(&format!("/v1/car/{}/rent?customer_id={}", car_id, first))
        .await;

    let response = app
        .get(&format!("/v1/car/{}/rent?customer_id={}", car_id, second))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let car = app.get(&format!("/v1/car/{}", car_id)).await;
    assert_eq!(car.body["renter_id"], first);
}

#[tokio::test]
async fn test_rent_to_unknown_customer_is_bad_request() {
    let app = TestApp::new();
    let car_id = app.create_car("Toyota", "Corolla", 2015).await;

    let response = app
        .get(&format!("/v1/car/{}/rent?customer_id=9999", car_id))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let car = app.get(&format!("/v1/car/{}", car_id)).await;
    assert_eq!(car.body["renter_id"], 0);
}

#[tokio::test]
async fn test_rent_unknown_car_is_not_found() {
    let app = TestApp::new();
    let customer_id = app.create_customer("John Doe").await;

    let response = app
        .get(&format!("/v1/car/424242/rent?customer_id={}", customer_id))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rent_without_customer_id_is_bad_request() {
    let app = TestApp::new();
    let car_id = app.create_car("Toyota", "Corolla", 2015).await;

    let response = app.get(&format!("/v1/car/{}/rent", car_id)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .get(&format!("/v1/car/{}/rent?customer_id=abc", car_id))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_return_car_clears_renter() {
    let app = TestApp::new();
    let car_id = app.create_car("Toyota", "Corolla", 2015).await;
    let customer_id = app.create_customer("John Doe").await;
    app.get(&format!("/v1/car/{}/rent?customer_id={}", car_id, customer_id))
        .await;

    let response = app.get(&format!("/v1/car/{}/return", car_id)).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let car = app.get(&format!("/v1/car/{}", car_id)).await;
    assert_eq!(car.body["renter_id"], 0);
}

#[tokio::test]
async fn test_return_unrented_car_is_forbidden() {
    let app = TestApp::new();
    let car_id = app.create_car("Toyota", "Corolla", 2015).await;

    let response = app.get(&format!("/v1/car/{}/return", car_id)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_rents_have_one_winner() {
    let app = Arc::new(TestApp::new());
    let car_id = app.create_car("Toyota", "Corolla", 2015).await;
    let first = app.create_customer("John Doe").await;
    let second = app.create_customer("Jane Roe").await;

    let a = {
        let app = Arc::clone(&app);
        tokio::spawn(async move {
            app.get(&format!("/v1/car/{}/rent?customer_id={}", car_id, first))
                .await
                .status
        })
    };
    let b = {
        let app = Arc::clone(&app);
        tokio::spawn(async move {
            app.get(&format!("/v1/car/{}/rent?customer_id={}", car_id, second))
                .await
                .status
        })
    };

    let statuses = [a.await.unwrap(), b.await.unwrap()];
    let winners = statuses
        .iter()
        .filter(|s| **s == StatusCode::NO_CONTENT)
        .count();
    assert_eq!(winners, 1);
    assert!(statuses
        .iter()
        .any(|s| *s == StatusCode::FORBIDDEN || *s == StatusCode::CONFLICT));

    let renter = app.get(&format!("/v1/car/{}", car_id)).await.body["renter_id"]
        .as_i64()
        .unwrap();
    assert!(renter == first || renter == second);
}
