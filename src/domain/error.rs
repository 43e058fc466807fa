//! Domain error taxonomy.
//!
//! Every failure a store or an entity method can produce is one of these
//! variants. Boundaries match on them exhaustively.

use super::entities::{CarId, CustomerId};

/// Closed set of domain and storage failures.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Car {0} not found")]
    CarNotFound(CarId),

    #[error("Customer {0} not found")]
    CustomerNotFound(CustomerId),

    #[error("Car {0} already exists")]
    CarAlreadyExists(CarId),

    #[error("Customer {0} already exists")]
    CustomerAlreadyExists(CustomerId),

    #[error("Car {0} is already rented")]
    CarAlreadyRented(CarId),

    #[error("Car {0} is not rented")]
    CarNotRented(CarId),

    /// The car changed between read and write.
    #[error("Car {0} was modified concurrently, retry the request")]
    CarVersionConflict(CarId),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Result alias used by entities and stores.
pub type DomainResult<T> = Result<T, DomainError>;
