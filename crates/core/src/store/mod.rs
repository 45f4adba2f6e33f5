//! Store ports for the credential and transaction stores.
//!
//! The relational engine sits behind these traits. Every method is a single
//! store operation; there is no read-modify-write sequence anywhere in the
//! domain layer.

mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use thiserror::Error;
use tillbook_shared::{
    Role,
    types::{AccountId, TransactionId},
};

use crate::account::Account;
use crate::ledger::Transaction;

/// Errors surfaced by a backing store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Any other backend failure. The detail is for logs only.
    #[error("store failure: {0}")]
    Backend(String),
}

/// Persistence for role-scoped accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Finds an account by role and normalized email.
    async fn find_by_email(&self, role: Role, email: &str) -> Result<Option<Account>, StoreError>;

    /// Inserts an account if no account with the same role and email exists.
    ///
    /// Returns `StoreError::UniqueViolation` when the pair is taken.
    async fn insert(&self, account: Account) -> Result<Account, StoreError>;

    /// Lists accounts of a role, newest first.
    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, StoreError>;

    /// Deletes an account of the given role. Returns false if nothing matched.
    async fn delete(&self, role: Role, id: AccountId) -> Result<bool, StoreError>;
}

/// Persistence for ledger transactions.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Appends a transaction.
    async fn insert(&self, transaction: Transaction) -> Result<Transaction, StoreError>;

    /// Lists transactions newest first, optionally for one owner.
    async fn list(&self, owner: Option<AccountId>) -> Result<Vec<Transaction>, StoreError>;

    /// Deletes a transaction, optionally only if it belongs to `owner`.
    /// Returns false if nothing matched.
    async fn delete(
        &self,
        id: TransactionId,
        owner: Option<AccountId>,
    ) -> Result<bool, StoreError>;
}
