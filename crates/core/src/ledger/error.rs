//! Ledger error types.

use thiserror::Error;
use tillbook_shared::{
    AppError,
    types::{AmountError, TransactionId},
};

use super::balance::BalanceOverflow;
use crate::store::StoreError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Amount is zero, negative or too precise.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// Kind is not one of the five recognized values.
    #[error("Unknown transaction kind '{0}'; expected sale, refund, void, income or expense")]
    UnknownKind(String),

    /// A required text field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A text field is longer than storage allows.
    #[error("{field} must be at most {max} characters")]
    FieldTooLong {
        /// Wire name of the field.
        field: &'static str,
        /// Maximum length in characters.
        max: usize,
    },

    // ========== State Errors ==========
    /// Transaction not found (or not visible to the caller).
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    // ========== Aggregation Errors ==========
    /// A balance total cannot be represented.
    #[error("Balance error: {0}")]
    Overflow(#[from] BalanceOverflow),

    // ========== Store Errors ==========
    /// Backing store failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Returns true for errors detected before any store call.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::UnknownKind(_)
                | Self::MissingField(_)
                | Self::FieldTooLong { .. }
        )
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount(_)
            | LedgerError::UnknownKind(_)
            | LedgerError::MissingField(_)
            | LedgerError::FieldTooLong { .. } => Self::Validation(err.to_string()),
            LedgerError::TransactionNotFound(id) => Self::NotFound(format!("transaction {id}")),
            LedgerError::Overflow(e) => Self::Internal(e.to_string()),
            LedgerError::Store(e) => Self::Store(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err: AppError = LedgerError::UnknownKind("payment".into()).into();
        assert_eq!(err.status_code(), 400);

        let err: AppError = LedgerError::InvalidAmount(AmountError::Zero).into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.to_string(),
            "Validation error: Invalid amount: amount must be greater than zero"
        );

        let err: AppError = LedgerError::MissingField("ownerName").into();
        assert_eq!(err.to_string(), "Validation error: ownerName is required");

        let err: AppError = LedgerError::FieldTooLong {
            field: "ownerName",
            max: 255,
        }
        .into();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_not_found_and_store_mapping() {
        let err: AppError = LedgerError::TransactionNotFound(TransactionId::new()).into();
        assert_eq!(err.status_code(), 404);

        let err: AppError = LedgerError::Store(StoreError::Backend("boom".into())).into();
        assert_eq!(err.status_code(), 500);
        assert!(err.is_internal());

        let err: AppError = LedgerError::Overflow(BalanceOverflow).into();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_is_validation() {
        assert!(LedgerError::MissingField("ownerName").is_validation());
        assert!(!LedgerError::TransactionNotFound(TransactionId::new()).is_validation());
    }
}
