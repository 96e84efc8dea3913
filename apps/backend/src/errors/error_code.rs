//! Error codes for the authentication gateway API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in logs and diagnostics.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Credentials rejected (unknown account, inactive account, or bad password)
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Authenticated but role not allowed
    Forbidden,

    // Request Validation
    /// One or more login fields failed validation
    ValidationError,
    /// General bad request error
    BadRequest,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            ErrorCode::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            ErrorCode::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
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
    use super::*;

    #[test]
    fn codes_are_screaming_snake_case() {
        let codes = [
            ErrorCode::Unauthorized,
            ErrorCode::UnauthorizedMissingBearer,
            ErrorCode::UnauthorizedInvalidJwt,
            ErrorCode::UnauthorizedExpiredJwt,
            ErrorCode::Forbidden,
            ErrorCode::ValidationError,
            ErrorCode::BadRequest,
            ErrorCode::DbError,
            ErrorCode::DbUnavailable,
            ErrorCode::ConfigError,
            ErrorCode::Internal,
        ];
        for code in codes {
            assert!(code
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }
}
