//! Car Service
//!
//! Handles car CRUD operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Car, CarId, CarStore, DomainResult};

/// Car service trait
#[async_trait]
pub trait CarService: Send + Sync {
    /// Register a new car; it starts unrented.
    async fn create_car(&self, details: CarDetailsDto) -> DomainResult<Car>;

    /// Get car by ID
    async fn get_car(&self, car_id: CarId) -> DomainResult<Car>;

    /// Replace make, model and year. The renter is kept.
    async fn update_car(&self, car_id: CarId, details: CarDetailsDto) -> DomainResult<Car>;

    /// Delete a car. Deleting an unknown car succeeds.
    async fn delete_car(&self, car_id: CarId) -> DomainResult<()>;
}

/// Client-editable fields of a car
#[derive(Debug, Clone)]
pub struct CarDetailsDto {
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// CarService implementation
pub struct CarServiceImpl {
    cars: Arc<dyn CarStore>,
}

impl CarServiceImpl {
    pub fn new(cars: Arc<dyn CarStore>) -> Self {
        Self { cars }
    }
}

#[async_trait]
impl CarService for CarServiceImpl {
    async fn create_car(&self, details: CarDetailsDto) -> DomainResult<Car> {
        let mut car = Car::new(details.make, details.model, details.year);
        car.id = self.cars.create(&car).await?;

        tracing::info!(car_id = car.id, make = %car.make, model = %car.model, "Car created");
        Ok(car)
    }

    async fn get_car(&self, car_id: CarId) -> DomainResult<Car> {
        self.cars.get(car_id).await
    }

    async fn update_car(&self, car_id: CarId, details: CarDetailsDto) -> DomainResult<Car> {
        // Read first so the renter and version survive the replacement
        let mut car = self.cars.get(car_id).await?;
        car.make = details.make;
        car.model = details.model;
        car.year = details.year;

        let updated = self.cars.update(&car).await?;
        tracing::debug!(car_id, version = updated.version, "Car updated");
        Ok(updated)
    }

    async fn delete_car(&self, car_id: CarId) -> DomainResult<()> {
        self.cars.delete(car_id).await?;
        tracing::info!(car_id, "Car deleted");
        Ok(())
    }
}
