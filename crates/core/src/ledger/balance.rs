//! Balance aggregation over a set of transactions.
//!
//! Balances are always derived from the full transaction list and never
//! stored, so the displayed balance cannot drift from the ledger.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::transaction::{Transaction, TransactionKind};

/// How a transaction kind affects the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Adds to `total_in`.
    Inflow,
    /// Adds to `total_out`.
    Outflow,
    /// Counted but never summed.
    Neutral,
}

impl Direction {
    /// The inflow/outflow partition of transaction kinds.
    #[must_use]
    pub const fn of(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Sale | TransactionKind::Income => Self::Inflow,
            TransactionKind::Refund | TransactionKind::Expense => Self::Outflow,
            TransactionKind::Void => Self::Neutral,
        }
    }
}

/// A running total left the representable decimal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("balance totals exceed the representable range")]
pub struct BalanceOverflow;

fn add(total: Decimal, amount: Decimal) -> Result<Decimal, BalanceOverflow> {
    total.checked_add(amount).ok_or(BalanceOverflow)
}

/// Aggregated view of a transaction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    /// Sum of inflow amounts.
    pub total_in: Decimal,
    /// Sum of outflow amounts.
    pub total_out: Decimal,
    /// `total_in - total_out`.
    pub balance: Decimal,
    /// Number of transactions considered, void included.
    pub count: usize,
}

impl BalanceSummary {
    /// Derives the summary from any sequence of transactions.
    ///
    /// # Errors
    ///
    /// Returns `BalanceOverflow` if a total cannot be represented.
    pub fn from_transactions<'a, I>(transactions: I) -> Result<Self, BalanceOverflow>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = Self::default();
        for tx in transactions {
            summary.count += 1;
            match Direction::of(tx.kind) {
                Direction::Inflow => {
                    summary.total_in = add(summary.total_in, tx.amount.value())?;
                }
                Direction::Outflow => {
                    summary.total_out = add(summary.total_out, tx.amount.value())?;
                }
                Direction::Neutral => {}
            }
        }
        summary.balance = summary
            .total_in
            .checked_sub(summary.total_out)
            .ok_or(BalanceOverflow)?;
        Ok(summary)
    }
}
