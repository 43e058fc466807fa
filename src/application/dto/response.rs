//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Car, Customer};

/// Car response
///
/// `renter_id` is 0 when the car is not rented.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CarResponse {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub renter_id: i64,
    pub year: i32,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            renter_id: car.renter_id().unwrap_or(0),
            make: car.make,
            model: car.model,
            year: car.year,
        }
    }
}

/// Customer response
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
        }
    }
}
