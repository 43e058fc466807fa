//! Rental Service
//!
//! Renting a car to a customer and returning it.
//!
//! Rent is a read-mutate-write over two stores. The write goes through
//! `CarStore::update`, which only applies when the car's version is still
//! the one that was read, so two racing rentals of the same car cannot both
//! land: the loser gets `CarVersionConflict` (raced the read) or
//! `CarAlreadyRented` (read after the winner committed).

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CarId, CarStore, CustomerId, CustomerStore, DomainError, DomainResult};
use crate::infrastructure::metrics::record_rental;

/// Rental service trait
#[async_trait]
pub trait RentalService: Send + Sync {
    /// Rent a car to a customer.
    async fn rent_car(&self, car_id: CarId, customer_id: CustomerId) -> DomainResult<()>;

    /// Return a rented car.
    async fn return_car(&self, car_id: CarId) -> DomainResult<()>;
}

/// RentalService implementation
pub struct RentalServiceImpl {
    cars: Arc<dyn CarStore>,
    customers: Arc<dyn CustomerStore>,
}

impl RentalServiceImpl {
    pub fn new(cars: Arc<dyn CarStore>, customers: Arc<dyn CustomerStore>) -> Self {
        Self { cars, customers }
    }
}

/// Label for the outcome of a rent/return attempt.
fn outcome(result: &DomainResult<()>, success: &'static str) -> &'static str {
    match result {
        Ok(()) => success,
        Err(DomainError::CarNotFound(_)) => "car_not_found",
        Err(DomainError::CustomerNotFound(_)) => "customer_not_found",
        Err(DomainError::CarAlreadyRented(_)) => "already_rented",
        Err(DomainError::CarNotRented(_)) => "not_rented",
        Err(DomainError::CarVersionConflict(_)) => "conflict",
        Err(_) => "error",
    }
}

#[async_trait]
impl RentalService for RentalServiceImpl {
    async fn rent_car(&self, car_id: CarId, customer_id: CustomerId) -> DomainResult<()> {
        let result = async {
            let mut car = self.cars.get(car_id).await?;
            let customer = self.customers.get(customer_id).await?;

            car.rent(customer.id)?;
            self.cars.update(&car).await?;
            Ok::<(), DomainError>(())
        }
        .await;

        record_rental("rent", outcome(&result, "rented"));
        match &result {
            Ok(()) => tracing::info!(car_id, customer_id, "Car rented"),
            Err(e) => tracing::debug!(car_id, customer_id, error = %e, "Rent rejected"),
        }
        result
    }

    async fn return_car(&self, car_id: CarId) -> DomainResult<()> {
        let result = async {
            let mut car = self.cars.get(car_id).await?;
            car.return_car()?;
            self.cars.update(&car).await?;
            Ok::<(), DomainError>(())
        }
        .await;

        record_rental("return", outcome(&result, "returned"));
        match &result {
            Ok(()) => tracing::info!(car_id, "Car returned"),
            Err(e) => tracing::debug!(car_id, error = %e, "Return rejected"),
        }
        result
    }
}
