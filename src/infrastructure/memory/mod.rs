//! In-Memory Stores
//!
//! Store implementations backed by a mutex-guarded map. Used for
//! development, tests and the `memory` storage backend.
//!
//! Each store owns its own table; nothing is global, so every test can
//! build a fresh pair.

mod car_store;
mod customer_store;

use std::collections::BTreeMap;

pub use car_store::InMemoryCarStore;
pub use customer_store::InMemoryCustomerStore;

/// Rows keyed by identity plus the next identity to hand out.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Pick the identity for a new row.
    ///
    /// A non-zero requested identity is kept as-is and the counter moves past
    /// it, so later generated identities never collide with it.
    fn assign_id(&mut self, requested: i64) -> i64 {
        if requested > 0 {
            self.next_id = self.next_id.max(requested + 1);
            requested
        } else {
            let id = self.next_id;
            self.next_id += 1;
            id
        }
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
