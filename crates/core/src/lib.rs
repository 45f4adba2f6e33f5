//! Core business logic for Tillbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached only through the store ports in [`store`].
//!
//! # Modules
//!
//! - `auth` - Session authenticator, access guard and password hashing
//! - `directory` - Cashier account registration and removal
//! - `ledger` - Transaction ledger and balance aggregation
//! - `store` - Store ports and the in-memory store

pub mod account;
pub mod auth;
pub mod directory;
pub mod ledger;
pub mod store;

pub use account::{Account, AccountProfile};
pub use auth::{AuthError, Identity, Session, SessionAuthenticator};
pub use directory::{DirectoryError, DirectoryService};
pub use ledger::{BalanceSummary, LedgerError, LedgerService, Transaction, TransactionKind};
pub use store::{AccountStore, InMemoryStore, StoreError, TransactionStore};
