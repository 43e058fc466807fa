//! # Rental Service Library
//!
//! This crate provides a car rental REST API with:
//! - Car and customer CRUD endpoints behind HTTP Basic authentication
//! - Renting and returning cars, safe under concurrent requests
//! - PostgreSQL or in-memory storage behind the same store traits
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Car and customer entities and store traits
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory stores, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! rental_service/
//! +-- config/         Configuration management
//! +-- domain/         Entities, store traits, domain errors
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, in-memory and metrics implementations
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
