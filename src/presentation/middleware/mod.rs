//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod cors;
pub mod logging;
pub mod recover;
pub mod security;

pub use auth::basic_auth_middleware;
pub use logging::track_metrics;
pub use security::security_headers;
