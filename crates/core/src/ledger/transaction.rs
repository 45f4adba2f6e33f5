//! Ledger transaction records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tillbook_shared::types::{AccountId, Amount, TransactionId};

use super::error::LedgerError;

/// The closed set of transaction kinds.
///
/// How each kind affects a balance is defined once, in
/// [`super::balance::Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Goods sold at the till.
    Sale,
    /// Money returned to a customer.
    Refund,
    /// A cancelled entry kept for the record.
    Void,
    /// Other money received.
    Income,
    /// Money paid out.
    Expense,
}

impl TransactionKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Sale,
        Self::Refund,
        Self::Void,
        Self::Income,
        Self::Expense,
    ];

    /// Returns the lowercase kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Refund => "refund",
            Self::Void => "void",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| LedgerError::UnknownKind(s.to_string()))
    }
}

/// An immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Server-assigned id.
    pub id: TransactionId,
    /// Account the entry is attributed to. May outlive the account.
    pub owner_id: AccountId,
    /// Owner display name captured at record time.
    pub owner_name: String,
    /// Always positive; direction comes from `kind`.
    pub amount: Amount,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Free text, possibly empty.
    pub description: String,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}
