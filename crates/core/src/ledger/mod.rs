//! Transaction ledger.
//!
//! This module implements the ledger engine:
//! - Transaction records and the closed set of kinds
//! - Validation of record requests
//! - Balance aggregation (the single inflow/outflow partition)
//! - Error types for ledger operations
//! - Ledger service for append, list, delete and summary

pub mod balance;
pub mod error;
pub mod service;
pub mod transaction;
pub mod validation;

#[cfg(test)]
mod balance_props;

pub use balance::{BalanceOverflow, BalanceSummary, Direction};
pub use error::LedgerError;
pub use service::LedgerService;
pub use transaction::{Transaction, TransactionKind};
pub use validation::{RecordTransactionInput, ValidatedRecord, validate_record};
