//! # Domain Entities
//!
//! Core domain entities of the rental service. Both map directly to their
//! database tables.
//!
//! - **Car**: a rentable car carrying the rental state machine
//! - **Customer**: a passive record of someone who can rent cars
//!
//! ## Store Traits
//!
//! Each entity has an associated store trait defining CRUD operations.
//! These traits are implemented in the infrastructure layer, once for
//! PostgreSQL and once in memory.

mod car;
mod customer;

pub use car::{Car, CarId, CarStore, RentalStatus, INITIAL_VERSION};
pub use customer::{Customer, CustomerId, CustomerStore};
