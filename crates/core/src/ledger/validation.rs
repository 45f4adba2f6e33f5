//! Validation of record requests, performed before any store call.

use rust_decimal::Decimal;
use tillbook_shared::types::{AccountId, Amount};

use super::error::LedgerError;
use super::transaction::TransactionKind;

/// Longest owner name, in characters, that storage accepts.
pub const MAX_OWNER_NAME_LENGTH: usize = 255;

/// Raw input for recording a transaction.
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    /// Account the entry is attributed to.
    pub owner_id: AccountId,
    /// Display name of the owner.
    pub owner_name: String,
    /// Requested amount; must be strictly positive.
    pub amount: Decimal,
    /// Kind as received on the wire.
    pub kind: String,
    /// Optional free text.
    pub description: Option<String>,
}

/// Input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    /// Owner account.
    pub owner_id: AccountId,
    /// Trimmed owner name.
    pub owner_name: String,
    /// Positive amount.
    pub amount: Amount,
    /// Parsed kind.
    pub kind: TransactionKind,
    /// Trimmed description, empty when absent.
    pub description: String,
}

/// Validates a record request.
///
/// # Errors
///
/// - `MissingField` when the owner name is blank
/// - `FieldTooLong` when the owner name exceeds [`MAX_OWNER_NAME_LENGTH`]
/// - `InvalidAmount` when the amount is not strictly positive
/// - `UnknownKind` when the kind is not recognized
pub fn validate_record(input: &RecordTransactionInput) -> Result<ValidatedRecord, LedgerError> {
    let owner_name = input.owner_name.trim();
    if owner_name.is_empty() {
        return Err(LedgerError::MissingField("ownerName"));
    }
    if owner_name.chars().count() > MAX_OWNER_NAME_LENGTH {
        return Err(LedgerError::FieldTooLong {
            field: "ownerName",
            max: MAX_OWNER_NAME_LENGTH,
        });
    }

    let amount = Amount::new(input.amount)?;
    let kind: TransactionKind = input.kind.parse()?;

    Ok(ValidatedRecord {
        owner_id: input.owner_id,
        owner_name: owner_name.to_string(),
        amount,
        kind,
        description: input
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    })
}
