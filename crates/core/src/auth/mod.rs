//! Authentication and authorization.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - The session authenticator (credential check and token issue)
//! - The access guard (token validation and role checks)

pub mod guard;
mod password;
pub mod session;

pub use guard::{Identity, authorize, authorize_owner, extract_bearer_token, require_role};
pub use password::{PasswordError, hash_password, verify_password, verify_password_or_dummy};
pub use session::{Session, SessionAuthenticator};
pub use tillbook_shared::Role;

use thiserror::Error;
use tillbook_shared::{AppError, JwtError};

use crate::store::StoreError;

/// Authentication and authorization failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown account or wrong secret; the two are indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No bearer token was presented.
    #[error("missing bearer token")]
    MissingToken,

    /// Signature or structure check failed.
    #[error("invalid token")]
    InvalidToken,

    /// Token is past its expiry.
    #[error("token expired")]
    ExpiredToken,

    /// The identity lacks the required role or ownership.
    #[error("{0}")]
    Forbidden(String),

    /// Backing store failure during login.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Hashing or signing failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => Self::ExpiredToken,
            JwtError::Invalid(_) => Self::InvalidToken,
            JwtError::EncodingError(e) => Self::Internal(e),
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::MissingToken => Self::MissingToken,
            AuthError::InvalidToken => Self::InvalidToken,
            AuthError::ExpiredToken => Self::ExpiredToken,
            AuthError::Forbidden(msg) => Self::Forbidden(msg),
            AuthError::Store(e) => Self::Store(e.to_string()),
            AuthError::Internal(msg) => Self::Internal(msg),
        }
    }
}
