//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CarService**: Car CRUD
//! - **CustomerService**: Customer CRUD
//! - **RentalService**: Renting and returning cars

pub mod car_service;
pub mod customer_service;
pub mod rental_service;

pub use car_service::{CarDetailsDto, CarService, CarServiceImpl};
pub use customer_service::{CustomerDetailsDto, CustomerService, CustomerServiceImpl};
pub use rental_service::{RentalService, RentalServiceImpl};
