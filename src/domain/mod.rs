//! # Domain Layer
//!
//! The domain layer contains the core business rules of the rental service.
//! It is independent of the HTTP framework and of any particular backend.
//!
//! ## Structure
//!
//! - **entities**: `Car`, `Customer` and their store traits
//! - **error**: the closed `DomainError` enumeration
//!
//! ## Design Principles
//!
//! - Entities encapsulate domain behavior (renting, returning)
//! - Store traits define data access contracts
//! - No dependencies on presentation or infrastructure

pub mod entities;
pub mod error;

// Re-export commonly used types
pub use entities::*;
pub use error::{DomainError, DomainResult};
