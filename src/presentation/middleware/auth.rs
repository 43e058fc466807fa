//! Authentication Middleware
//!
//! HTTP Basic authentication against the single configured credential pair.
//! Handlers never see who the caller is.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};
use sha2::{Digest, Sha256};

use crate::config::AuthSettings;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Compare two secrets without leaking where they differ.
///
/// Both sides are hashed first so the comparison always runs over 32 bytes
/// regardless of input length.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = Sha256::digest(a.as_bytes());
    let b = Sha256::digest(b.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Check a username/password pair against the configured credentials.
pub fn credentials_match(settings: &AuthSettings, username: &str, password: &str) -> bool {
    // Evaluate both comparisons, no short circuit
    let user_ok = constant_time_eq(username, &settings.username);
    let pass_ok = constant_time_eq(password, &settings.password);
    user_ok & pass_ok
}

/// Basic authentication middleware for the API routes
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    header: Result<TypedHeader<Authorization<Basic>>, TypedHeaderRejection>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(basic)) = header
        .map_err(|_| AppError::Unauthorized("Missing or malformed basic credentials".into()))?;

    if !credentials_match(&state.settings.auth, basic.username(), basic.password()) {
        tracing::warn!(path = %request.uri().path(), "Rejected invalid credentials");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    Ok(next.run(request).await)
}
