//! Error codes for the Taskforge backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. All codes
//! are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear in HTTP
//! responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid access token
    UnauthorizedInvalidJwt,
    /// Access token has expired
    UnauthorizedExpiredJwt,
    /// Valid identity, but the route requires the ADMIN role
    InsufficientRole,

    // Request Validation
    /// General validation error
    ValidationError,
    /// Invalid email address
    InvalidEmail,
    /// Password does not meet the password rules
    InvalidPassword,

    // Resource Not Found
    /// User not found
    UserNotFound,
    /// Todo not found
    TodoNotFound,
    /// Comment not found
    CommentNotFound,
    /// Manager assignment not found
    ManagerNotFound,

    // Business Logic Conflicts
    /// Email already registered
    DuplicateEmail,

    // System Errors
    /// Route reached a handler without passing the access gate
    Wiring,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// All codes, for exhaustiveness checks in tests.
    pub const ALL: &'static [ErrorCode] = &[
        Self::Unauthorized,
        Self::UnauthorizedMissingBearer,
        Self::UnauthorizedInvalidJwt,
        Self::UnauthorizedExpiredJwt,
        Self::InsufficientRole,
        Self::ValidationError,
        Self::InvalidEmail,
        Self::InvalidPassword,
        Self::UserNotFound,
        Self::TodoNotFound,
        Self::CommentNotFound,
        Self::ManagerNotFound,
        Self::DuplicateEmail,
        Self::Wiring,
        Self::ConfigError,
        Self::Internal,
    ];

    /// The canonical SCREAMING_SNAKE_CASE string for this code, exactly as
    /// it appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TodoNotFound => "TODO_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::ManagerNotFound => "MANAGER_NOT_FOUND",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::Wiring => "WIRING",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ErrorCode;

    #[test]
    fn code_strings_are_unique() {
        let mut seen = HashSet::new();
        for code in ErrorCode::ALL {
            assert!(seen.insert(code.as_str()), "duplicate code {}", code);
        }
    }

    #[test]
    fn code_strings_are_screaming_snake_case() {
        for code in ErrorCode::ALL {
            assert!(
                code.as_str()
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == '_'),
                "{} is not SCREAMING_SNAKE_CASE",
                code
            );
        }
    }
}
