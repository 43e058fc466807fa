//! In-memory CarStore.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::Table;
use crate::domain::{Car, CarId, CarStore, DomainError, DomainResult, INITIAL_VERSION};

/// Car store holding its rows behind a mutex.
///
/// The version check and the write in `update` happen under one lock, which
/// is what makes concurrent rentals of the same car produce one winner.
#[derive(Debug, Default)]
pub struct InMemoryCarStore {
    table: Mutex<Table<Car>>,
}

impl InMemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored cars.
    pub fn len(&self) -> usize {
        self.table.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CarStore for InMemoryCarStore {
    async fn create(&self, car: &Car) -> DomainResult<CarId> {
        let mut table = self.table.lock();
        if car.id != 0 && table.rows.contains_key(&car.id) {
            return Err(DomainError::CarAlreadyExists(car.id));
        }

        let id = table.assign_id(car.id);
        let stored = Car {
            id,
            version: INITIAL_VERSION,
            ..car.clone()
        };
        table.rows.insert(id, stored);
        Ok(id)
    }

    async fn get(&self, id: CarId) -> DomainResult<Car> {
        self.table
            .lock()
            .rows
            .get(&id)
            .cloned()
            .ok_or(DomainError::CarNotFound(id))
    }

    async fn update(&self, car: &Car) -> DomainResult<Car> {
        let mut table = self.table.lock();
        let current = table
            .rows
            .get_mut(&car.id)
            .ok_or(DomainError::CarNotFound(car.id))?;

        if current.version != car.version {
            return Err(DomainError::CarVersionConflict(car.id));
        }

        *current = Car {
            version: car.version + 1,
            ..car.clone()
        };
        Ok(current.clone())
    }

    async fn delete(&self, id: CarId) -> DomainResult<()> {
        self.table.lock().rows.remove(&id);
        Ok(())
    }
}
