//! In-memory CustomerStore.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::Table;
use crate::domain::{Customer, CustomerId, CustomerStore, DomainError, DomainResult};

/// Customer store holding its rows behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    table: Mutex<Table<Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn create(&self, customer: &Customer) -> DomainResult<CustomerId> {
        let mut table = self.table.lock();
        if customer.id != 0 && table.rows.contains_key(&customer.id) {
            return Err(DomainError::CustomerAlreadyExists(customer.id));
        }

        let id = table.assign_id(customer.id);
        table.rows.insert(
            id,
            Customer {
                id,
                ..customer.clone()
            },
        );
        Ok(id)
    }

    async fn get(&self, id: CustomerId) -> DomainResult<Customer> {
        self.table
            .lock()
            .rows
            .get(&id)
            .cloned()
            .ok_or(DomainError::CustomerNotFound(id))
    }

    async fn update(&self, customer: &Customer) -> DomainResult<Customer> {
        let mut table = self.table.lock();
        let current = table
            .rows
            .get_mut(&customer.id)
            .ok_or(DomainError::CustomerNotFound(customer.id))?;

        *current = customer.clone();
        Ok(current.clone())
    }

    async fn delete(&self, id: CustomerId) -> DomainResult<()> {
        self.table.lock().rows.remove(&id);
        Ok(())
    }
}
