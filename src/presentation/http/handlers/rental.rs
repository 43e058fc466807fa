//! Rental Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
};

use crate::application::dto::RentCarParams;
use crate::application::services::{RentalService, RentalServiceImpl};
use crate::domain::DomainError;
use crate::presentation::http::extractors::parse_id;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn rental_service(state: &AppState) -> RentalServiceImpl {
    RentalServiceImpl::new(Arc::clone(&state.cars), Arc::clone(&state.customers))
}

/// Rent a car to the customer named in `?customer_id=`
pub async fn rent_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
    params: Result<Query<RentCarParams>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let car_id = parse_id(&car_id, "car")?;
    let Query(params) = params
        .map_err(|_| AppError::BadRequest("customer_id query parameter is required".into()))?;

    rental_service(&state)
        .rent_car(car_id, params.customer_id)
        .await
        .map_err(|e| match e {
            // An unknown customer is a bad argument, the car itself was found
            DomainError::CustomerNotFound(_) => AppError::BadRequest(e.to_string()),
            e => AppError::from(e),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Return a rented car
pub async fn return_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let car_id = parse_id(&car_id, "car")?;
    rental_service(&state).return_car(car_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
