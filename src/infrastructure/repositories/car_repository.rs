//! Car Store Implementation
//!
//! PostgreSQL implementation of the CarStore trait.
//! Maps between the `cars` table and the domain Car entity.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Car, CarId, CarStore, DomainError, DomainResult, RentalStatus};
use crate::infrastructure::metrics::record_db_query;

/// Database row representation of the `cars` table.
#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: i64,
    customer_id: Option<i64>,
    make: String,
    model: String,
    year: i32,
    version: i64,
}

impl CarRow {
    /// Convert database row to domain Car entity.
    fn into_car(self) -> Car {
        Car {
            id: self.id,
            make: self.make,
            model: self.model,
            year: self.year,
            rental: RentalStatus::from_column(self.customer_id),
            version: self.version,
        }
    }
}

/// PostgreSQL car store.
///
/// Updates are guarded by the `version` column so that a write based on a
/// stale read never lands.
#[derive(Clone)]
pub struct PgCarStore {
    pool: PgPool,
}

impl PgCarStore {
    /// Create a new PgCarStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: CarId) -> DomainResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cars WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}

#[async_trait]
impl CarStore for PgCarStore {
    /// Insert a car; the identity always comes from the `cars` sequence.
    async fn create(&self, car: &Car) -> DomainResult<CarId> {
        let start = Instant::now();
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO cars (customer_id, make, model, year)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(car.rental.to_column())
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::CarAlreadyExists(car.id)
            }
            _ => DomainError::Storage(e),
        })?;
        record_db_query("insert", "cars", start.elapsed().as_secs_f64());

        Ok(id)
    }

    async fn get(&self, id: CarId) -> DomainResult<Car> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, customer_id, make, model, year, version
            FROM cars
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        record_db_query("select", "cars", start.elapsed().as_secs_f64());

        row.map(CarRow::into_car).ok_or(DomainError::CarNotFound(id))
    }

    /// Compare-and-swap on `version`.
    async fn update(&self, car: &Car) -> DomainResult<Car> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            UPDATE cars
            SET customer_id = $2,
                make = $3,
                model = $4,
                year = $5,
                version = version + 1
            WHERE id = $1 AND version = $6
            RETURNING id, customer_id, make, model, year, version
            "#,
        )
        .bind(car.id)
        .bind(car.rental.to_column())
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.version)
        .fetch_optional(&self.pool)
        .await?;
        record_db_query("update", "cars", start.elapsed().as_secs_f64());

        match row {
            Some(row) => Ok(row.into_car()),
            None if self.exists(car.id).await? => Err(DomainError::CarVersionConflict(car.id)),
            None => Err(DomainError::CarNotFound(car.id)),
        }
    }

    async fn delete(&self, id: CarId) -> DomainResult<()> {
        let start = Instant::now();
        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        record_db_query("delete", "cars", start.elapsed().as_secs_f64());

        Ok(())
    }
}
