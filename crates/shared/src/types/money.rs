//! Positive monetary amount with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//! Amounts are currency-agnostic and always strictly positive; the direction
//! of a ledger entry comes from its kind, never from a sign.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest number of fractional digits an amount may carry.
pub const MAX_AMOUNT_SCALE: u32 = 4;

/// Exclusive upper bound for an amount (10^15), the integer range of
/// `NUMERIC(19,4)`.
pub const AMOUNT_CEILING: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Reasons a decimal cannot become an `Amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Zero is not a valid amount.
    #[error("amount must be greater than zero")]
    Zero,
    /// Negative values are rejected; use the transaction kind for direction.
    #[error("amount must not be negative")]
    Negative,
    /// Too many fractional digits for storage.
    #[error("amount supports at most {MAX_AMOUNT_SCALE} decimal places")]
    TooPrecise,
    /// At or above [`AMOUNT_CEILING`].
    #[error("amount must be less than 1000000000000000")]
    TooLarge,
}

/// A strictly positive decimal amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount, rejecting zero, negative, oversized and over-precise
    /// values.
    ///
    /// # Errors
    ///
    /// Returns the matching `AmountError` when the value is not a valid amount.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_zero() {
            return Err(AmountError::Zero);
        }
        if value.is_sign_negative() {
            return Err(AmountError::Negative);
        }
        if value >= AMOUNT_CEILING {
            return Err(AmountError::TooLarge);
        }
        if value.normalize().scale() > MAX_AMOUNT_SCALE {
            return Err(AmountError::TooPrecise);
        }
        Ok(Self(value))
    }

    /// Returns the inner decimal.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
