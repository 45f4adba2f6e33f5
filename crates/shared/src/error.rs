//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Message returned to callers in place of backing-store or internal details.
pub const GENERIC_INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application error types.
///
/// Every variant maps onto one HTTP status and one stable error code. Store
/// and internal failures carry their detail for server-side logging only.
#[derive(Debug, Error)]
pub enum AppError {
    /// Login failed. Unknown account and wrong secret are reported identically.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer token on a protected route.
    #[error("Authorization header with Bearer token is required")]
    MissingToken,

    /// Token signature or structure is invalid.
    #[error("Invalid or malformed token")]
    InvalidToken,

    /// Token is past its expiry.
    #[error("Token has expired")]
    ExpiredToken,

    /// Access denied.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An account with this email already exists for the role.
    #[error("An account with email {0} already exists")]
    DuplicateEmail(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backing store failure.
    #[error("Store error: {0}")]
    Store(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials | Self::Validation(_) => 400,
            Self::MissingToken | Self::InvalidToken | Self::ExpiredToken => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::DuplicateEmail(_) => 409,
            Self::Store(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "STORE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for failures whose detail must stay server-side.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Internal(_))
    }

    /// Returns the message that may be shown to the caller.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_internal() {
            GENERIC_INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
