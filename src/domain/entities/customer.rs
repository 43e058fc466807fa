//! Customer entity and store trait.
//!
//! Maps to the `customers` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainResult;

/// Customer identity. Assigned by the store, never zero once persisted.
pub type CustomerId = i64;

/// A customer who can rent cars.
///
/// Maps to the `customers` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

impl Customer {
    /// Create a customer with no identity yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

/// Store trait for Customer data access operations.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Persist a new customer and return its identity.
    async fn create(&self, customer: &Customer) -> DomainResult<CustomerId>;

    /// Fetch a customer, `CustomerNotFound` if absent.
    async fn get(&self, id: CustomerId) -> DomainResult<Customer>;

    /// Replace a customer in full, `CustomerNotFound` if absent.
    async fn update(&self, customer: &Customer) -> DomainResult<Customer>;

    /// Remove a customer. Removing an absent identity is a no-op.
    async fn delete(&self, id: CustomerId) -> DomainResult<()>;
}
