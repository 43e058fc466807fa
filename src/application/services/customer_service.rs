//! Customer Service
//!
//! Handles customer CRUD operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Customer, CustomerId, CustomerStore, DomainResult};

/// Customer service trait
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Register a new customer
    async fn create_customer(&self, details: CustomerDetailsDto) -> DomainResult<Customer>;

    /// Get customer by ID
    async fn get_customer(&self, customer_id: CustomerId) -> DomainResult<Customer>;

    /// Replace a customer's details
    async fn update_customer(
        &self,
        customer_id: CustomerId,
        details: CustomerDetailsDto,
    ) -> DomainResult<Customer>;

    /// Delete a customer.
    ///
    /// Cars rented by the customer keep their renter reference.
    async fn delete_customer(&self, customer_id: CustomerId) -> DomainResult<()>;
}

/// Client-editable fields of a customer
#[derive(Debug, Clone)]
pub struct CustomerDetailsDto {
    pub name: String,
}

/// CustomerService implementation
pub struct CustomerServiceImpl {
    customers: Arc<dyn CustomerStore>,
}

impl CustomerServiceImpl {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl CustomerService for CustomerServiceImpl {
    async fn create_customer(&self, details: CustomerDetailsDto) -> DomainResult<Customer> {
        let mut customer = Customer::new(details.name);
        customer.id = self.customers.create(&customer).await?;

        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }

    async fn get_customer(&self, customer_id: CustomerId) -> DomainResult<Customer> {
        self.customers.get(customer_id).await
    }

    async fn update_customer(
        &self,
        customer_id: CustomerId,
        details: CustomerDetailsDto,
    ) -> DomainResult<Customer> {
        let customer = Customer {
            id: customer_id,
            name: details.name,
        };
        self.customers.update(&customer).await
    }

    async fn delete_customer(&self, customer_id: CustomerId) -> DomainResult<()> {
        self.customers.delete(customer_id).await?;
        tracing::info!(customer_id, "Customer deleted");
        Ok(())
    }
}
