//! Cashier directory error types.

use thiserror::Error;
use tillbook_shared::{AppError, types::AccountId};

use crate::auth::PasswordError;
use crate::store::StoreError;

/// Errors that can occur in directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A required field is blank or malformed.
    #[error("{0}")]
    Validation(String),

    /// An account with this email already exists for the role.
    #[error("an account with email {0} already exists")]
    DuplicateEmail(String),

    /// No cashier with this id.
    #[error("cashier not found: {0}")]
    CashierNotFound(AccountId),

    /// Secret hashing failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Backing store failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Validation(msg) => Self::Validation(msg),
            DirectoryError::DuplicateEmail(email) => Self::DuplicateEmail(email),
            DirectoryError::CashierNotFound(id) => Self::NotFound(format!("cashier {id}")),
            DirectoryError::Password(e) => Self::Internal(e.to_string()),
            DirectoryError::Store(e) => Self::Store(e.to_string()),
        }
    }
}
