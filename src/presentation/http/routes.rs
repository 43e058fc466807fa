//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{basic_auth_middleware, security_headers, track_metrics};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/v1", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Outermost, so headers land on every response including 401s
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API v1 routes (protected)
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(car_routes())
        .merge(customer_routes())
        .route_layer(middleware::from_fn_with_state(state, basic_auth_middleware))
        // Outside auth, so rejected requests are counted too
        .route_layer(middleware::from_fn(track_metrics))
}

/// Car routes
fn car_routes() -> Router<AppState> {
    Router::new()
        .route("/car", post(handlers::car::create_car))
        .route(
            "/car/{car_id}",
            get(handlers::car::get_car)
                .put(handlers::car::update_car)
                .delete(handlers::car::delete_car),
        )
        .route(
            "/car/{car_id}/rent",
            get(handlers::rental::rent_car).post(handlers::rental::rent_car),
        )
        .route(
            "/car/{car_id}/return",
            get(handlers::rental::return_car).post(handlers::rental::return_car),
        )
}

/// Customer routes
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customer", post(handlers::customer::create_customer))
        .route(
            "/customer/{customer_id}",
            get(handlers::customer::get_customer)
                .put(handlers::customer::update_customer)
                .delete(handlers::customer::delete_customer),
        )
}
