//! Car entity and store trait.
//!
//! Maps to the `cars` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::customer::CustomerId;
use crate::domain::error::{DomainError, DomainResult};

/// Car identity. Assigned by the store, never zero once persisted.
pub type CarId = i64;

/// Version a freshly created car starts at.
pub const INITIAL_VERSION: i64 = 1;

/// Who, if anyone, currently holds the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "customer_id")]
pub enum RentalStatus {
    #[default]
    Available,
    RentedTo(CustomerId),
}

impl RentalStatus {
    /// Build from the nullable `customer_id` column.
    pub fn from_column(customer_id: Option<CustomerId>) -> Self {
        match customer_id {
            Some(id) => Self::RentedTo(id),
            None => Self::Available,
        }
    }

    /// Value for the nullable `customer_id` column.
    pub fn to_column(self) -> Option<CustomerId> {
        match self {
            Self::Available => None,
            Self::RentedTo(id) => Some(id),
        }
    }
}

/// A car that can be rented out to a customer.
///
/// Maps to the `cars` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - customer_id: BIGINT NULL (renter, weak reference to customers.id)
/// - make: TEXT NOT NULL
/// - model: TEXT NOT NULL
/// - year: INTEGER NOT NULL
/// - version: BIGINT NOT NULL DEFAULT 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Store-assigned identity (0 until created)
    pub id: CarId,

    /// Manufacturer
    pub make: String,

    /// Model name
    pub model: String,

    /// Model year
    pub year: i32,

    /// Renter reference
    pub rental: RentalStatus,

    /// Optimistic concurrency token, advanced by every successful update
    pub version: i64,
}

impl Car {
    /// Create an unrented car with no identity yet.
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            id: 0,
            make: make.into(),
            model: model.into(),
            year,
            rental: RentalStatus::Available,
            version: INITIAL_VERSION,
        }
    }

    /// The customer currently renting this car.
    pub fn renter_id(&self) -> Option<CustomerId> {
        match self.rental {
            RentalStatus::Available => None,
            RentalStatus::RentedTo(id) => Some(id),
        }
    }

    /// Whether the car is currently rented out.
    pub fn rented(&self) -> bool {
        self.renter_id().is_some()
    }

    /// Rent the car to a customer.
    ///
    /// # Errors
    ///
    /// `CarAlreadyRented` if someone already holds the car; the renter is
    /// left untouched.
    pub fn rent(&mut self, customer_id: CustomerId) -> DomainResult<()> {
        if self.rented() {
            return Err(DomainError::CarAlreadyRented(self.id));
        }
        self.rental = RentalStatus::RentedTo(customer_id);
        Ok(())
    }

    /// Return the car and make it available again.
    ///
    /// # Errors
    ///
    /// `CarNotRented` if the car is not rented.
    pub fn return_car(&mut self) -> DomainResult<()> {
        if !self.rented() {
            return Err(DomainError::CarNotRented(self.id));
        }
        self.rental = RentalStatus::Available;
        Ok(())
    }
}

/// Store trait for Car data access operations.
///
/// Implemented by the PostgreSQL and in-memory backends.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Persist a new car and return its identity.
    ///
    /// Fails with `CarAlreadyExists` when the backend preserves supplied
    /// identities and that identity is taken.
    async fn create(&self, car: &Car) -> DomainResult<CarId>;

    /// Fetch a car, `CarNotFound` if absent.
    async fn get(&self, id: CarId) -> DomainResult<Car>;

    /// Replace a car in full.
    ///
    /// The write only applies if `car.version` still matches the stored
    /// version; otherwise `CarVersionConflict`. Returns the stored car with
    /// its advanced version. `CarNotFound` if the identity is absent.
    async fn update(&self, car: &Car) -> DomainResult<Car>;

    /// Remove a car. Removing an absent identity is a no-op.
    async fn delete(&self, id: CarId) -> DomainResult<()>;
}
