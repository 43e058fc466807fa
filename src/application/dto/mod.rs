//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CreateUpdateCarRequest, CreateUpdateCustomerRequest, RentCarParams};
pub use response::{CarResponse, CustomerResponse};
