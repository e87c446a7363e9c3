//! Claims carried by backend-issued access tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role granted to a user at signup and embedded in every access token.
///
/// Serialized as `"USER"` / `"ADMIN"` both inside tokens and in request
/// and response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims included in our backend-issued access tokens.
///
/// Immutable once minted; a successfully verified token yields exactly the
/// claims it was created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Internal user identifier (users.id)
    pub sub: i64,
    pub email: String,
    pub role: UserRole,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
