//! Repository Implementations
//!
//! PostgreSQL implementations of the domain store traits.
//!
//! ## Available Stores
//!
//! - **PgCarStore** - cars, with version-guarded updates
//! - **PgCustomerStore** - customers
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use rental_service::infrastructure::repositories::{PgCarStore, PgCustomerStore};
//!
//! async fn setup_stores(pool: PgPool) {
//!     let cars = PgCarStore::new(pool.clone());
//!     let customers = PgCustomerStore::new(pool);
//! }
//! ```

pub mod car_repository;
pub mod customer_repository;

pub use car_repository::PgCarStore;
pub use customer_repository::PgCustomerStore;
