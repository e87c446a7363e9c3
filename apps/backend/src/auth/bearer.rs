//! Authorization-header parsing.
//!
//! This module only pulls the raw token string out of a request; it never
//! verifies anything. A wrong scheme or an empty token is treated exactly
//! like a missing credential.

use actix_web::http::header;
use actix_web::HttpRequest;

use crate::error::AppError;

const BEARER_SCHEME: &str = "Bearer ";

/// Strip the `"Bearer "` scheme off a raw Authorization header value.
pub fn strip_bearer_scheme(header_value: &str) -> Result<&str, AppError> {
    let token = header_value
        .strip_prefix(BEARER_SCHEME)
        .ok_or_else(AppError::unauthorized_missing_bearer)?
        .trim();

    if token.is_empty() {
        return Err(AppError::unauthorized_missing_bearer());
    }

    Ok(token)
}

/// Extract the bearer token from a request's Authorization header.
///
/// Returns `Ok(None)` when the header is absent; fails when the header is
/// present but not a well-formed `Bearer <token>` value.
pub fn bearer_token(req: &HttpRequest) -> Result<Option<String>, AppError> {
    let header_value = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => value,
        None => return Ok(None),
    };

    let header_str = header_value
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    strip_bearer_scheme(header_str).map(|token| Some(token.to_string()))
}
