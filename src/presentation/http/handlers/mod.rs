//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod car;
pub mod customer;
pub mod health;
pub mod rental;
