//! Error codes for the sleeper service.
//!
//! Codes never reach response bodies (errors are status-only on the wire);
//! they label structured log events so failures can be grouped.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Request body could not be parsed
    BadRequest,
    /// Request parsed but carried an unusable value
    ValidationError,

    // Store Errors
    /// Generic database failure
    DbError,
    /// Database could not be reached or pool exhausted
    DbUnavailable,
    /// Store call exceeded its deadline
    DbTimeout,
    /// Unique or other constraint rejected a write
    ConstraintViolation,
    /// Lookup matched no row
    RecordNotFound,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ErrorCode;

    const ALL: &[ErrorCode] = &[
        ErrorCode::BadRequest,
        ErrorCode::ValidationError,
        ErrorCode::DbError,
        ErrorCode::DbUnavailable,
        ErrorCode::DbTimeout,
        ErrorCode::ConstraintViolation,
        ErrorCode::RecordNotFound,
        ErrorCode::Internal,
        ErrorCode::ConfigError,
    ];

    #[test]
    fn codes_are_unique_screaming_snake_case() {
        let mut seen = HashSet::new();
        for code in ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate error code {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "code {s} is not SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::DbTimeout.to_string(), "DB_TIMEOUT");
    }
}
