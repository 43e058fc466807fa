//! Customer Store Implementation
//!
//! PostgreSQL implementation of the CustomerStore trait.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Customer, CustomerId, CustomerStore, DomainError, DomainResult};
use crate::infrastructure::metrics::record_db_query;

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// PostgreSQL customer store.
#[derive(Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    /// Create a new PgCustomerStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn create(&self, customer: &Customer) -> DomainResult<CustomerId> {
        let start = Instant::now();
        let id = sqlx::query_scalar::<_, i64>("INSERT INTO customers (name) VALUES ($1) RETURNING id")
            .bind(&customer.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    DomainError::CustomerAlreadyExists(customer.id)
                }
                _ => DomainError::Storage(e),
            })?;
        record_db_query("insert", "customers", start.elapsed().as_secs_f64());

        Ok(id)
    }

    async fn get(&self, id: CustomerId) -> DomainResult<Customer> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CustomerRow>("SELECT id, name FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        record_db_query("select", "customers", start.elapsed().as_secs_f64());

        row.map(Customer::from).ok_or(DomainError::CustomerNotFound(id))
    }

    async fn update(&self, customer: &Customer) -> DomainResult<Customer> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers
            SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .fetch_optional(&self.pool)
        .await?;
        record_db_query("update", "customers", start.elapsed().as_secs_f64());

        row.map(Customer::from)
            .ok_or(DomainError::CustomerNotFound(customer.id))
    }

    async fn delete(&self, id: CustomerId) -> DomainResult<()> {
        let start = Instant::now();
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        record_db_query("delete", "customers", start.elapsed().as_secs_f64());

        Ok(())
    }
}
