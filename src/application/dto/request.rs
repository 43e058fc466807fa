//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{CarDetailsDto, CustomerDetailsDto};

/// Create or update car request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUpdateCarRequest {
    #[validate(length(min = 1, max = 255, message = "Make must be 1-255 characters"))]
    pub make: String,

    #[validate(length(min = 1, max = 255, message = "Model must be 1-255 characters"))]
    pub model: String,

    #[validate(range(min = 1886, max = 9999, message = "Year must be between 1886 and 9999"))]
    pub year: i32,
}

impl From<CreateUpdateCarRequest> for CarDetailsDto {
    fn from(body: CreateUpdateCarRequest) -> Self {
        Self {
            make: body.make,
            model: body.model,
            year: body.year,
        }
    }
}

/// Create or update customer request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUpdateCustomerRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

impl From<CreateUpdateCustomerRequest> for CustomerDetailsDto {
    fn from(body: CreateUpdateCustomerRequest) -> Self {
        Self { name: body.name }
    }
}

/// Query string of the rent endpoint (`?customer_id=N`)
#[derive(Debug, Deserialize)]
pub struct RentCarParams {
    pub customer_id: i64,
}
