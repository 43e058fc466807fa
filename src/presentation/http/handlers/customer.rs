//! Customer Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CreateUpdateCustomerRequest, CustomerResponse};
use crate::application::services::{CustomerService, CustomerServiceImpl};
use crate::presentation::http::extractors::{parse_id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn customer_service(state: &AppState) -> CustomerServiceImpl {
    CustomerServiceImpl::new(Arc::clone(&state.customers))
}

/// Create a new customer
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUpdateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let customer = customer_service(&state).create_customer(body.into()).await?;
    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

/// Get customer by ID
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer_id = parse_id(&customer_id, "customer")?;
    let customer = customer_service(&state).get_customer(customer_id).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// Replace a customer's details
pub async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    ValidatedJson(body): ValidatedJson<CreateUpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer_id = parse_id(&customer_id, "customer")?;
    let customer = customer_service(&state)
        .update_customer(customer_id, body.into())
        .await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// Delete a customer
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let customer_id = parse_id(&customer_id, "customer")?;
    customer_service(&state).delete_customer(customer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
