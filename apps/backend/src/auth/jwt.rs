use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::{AccessClaims, UserRole};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Access tokens live for one hour; expiry is the only invalidation path
/// (no refresh, no revocation list).
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Mint an HS256 access token for the given identity.
///
/// Pure computation over (identity, clock, secret); no I/O.
pub fn mint_access_token(
    user_id: i64,
    email: &str,
    role: UserRole,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("system clock is before the unix epoch".to_string()))?
        .as_secs() as i64;
    let exp = iat + TOKEN_TTL_SECS;

    let claims = AccessClaims {
        sub: user_id,
        email: email.to_string(),
        role,
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("failed to encode access token: {e}")))
}

/// Verify an access token and return its claims.
///
/// Errors:
/// - past expiry → `AppError::unauthorized_expired_jwt()`
/// - bad signature, malformed structure, or any other decode failure
///   → `AppError::unauthorized_invalid_jwt()`
///
/// Verification is a pure function of (token, secret, clock): the same
/// valid token verifies to the same claims every time.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<AccessClaims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    // No clock-skew window: a token is valid strictly before `exp`.
    validation.leeway = 0;

    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}
