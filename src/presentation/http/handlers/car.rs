//! Car Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CarResponse, CreateUpdateCarRequest};
use crate::application::services::{CarService, CarServiceImpl};
use crate::presentation::http::extractors::{parse_id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn car_service(state: &AppState) -> CarServiceImpl {
    CarServiceImpl::new(Arc::clone(&state.cars))
}

/// Create a new car
pub async fn create_car(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUpdateCarRequest>,
) -> Result<(StatusCode, Json<CarResponse>), AppError> {
    let car = car_service(&state).create_car(body.into()).await?;
    Ok((StatusCode::CREATED, Json(CarResponse::from(car))))
}

/// Get car by ID
pub async fn get_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<Json<CarResponse>, AppError> {
    let car_id = parse_id(&car_id, "car")?;
    let car = car_service(&state).get_car(car_id).await?;
    Ok(Json(CarResponse::from(car)))
}

/// Replace a car's make, model and year
pub async fn update_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
    ValidatedJson(body): ValidatedJson<CreateUpdateCarRequest>,
) -> Result<Json<CarResponse>, AppError> {
    let car_id = parse_id(&car_id, "car")?;
    let car = car_service(&state).update_car(car_id, body.into()).await?;
    Ok(Json(CarResponse::from(car)))
}

/// Delete a car
pub async fn delete_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let car_id = parse_id(&car_id, "car")?;
    car_service(&state).delete_car(car_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
