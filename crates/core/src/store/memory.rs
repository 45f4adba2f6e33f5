use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tillbook_shared::{
    Role,
    types::{AccountId, TransactionId},
};

use super::{AccountStore, StoreError, TransactionStore};
use crate::account::Account;
use crate::ledger::Transaction;

/// In-memory account and transaction store.
///
/// Intended for tests/dev. Uniqueness is checked and the insert performed
/// under one write lock, so concurrent inserts behave like a unique index.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    accounts: RwLock<Vec<Account>>,
    transactions: RwLock<Vec<Transaction>>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `StoreError::Backend`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Backend(
                "connection refused: in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

/// Newest first. Among equal timestamps the later insert wins.
fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) -> Vec<T> {
    let mut out: Vec<T> = items.iter().rev().cloned().collect();
    out.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    out
}

#[async_trait]
impl AccountStore for InMemoryStore {
    async fn find_by_email(&self, role: Role, email: &str) -> Result<Option<Account>, StoreError> {
        self.check_available()?;
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts
            .iter()
            .find(|a| a.role == role && a.email == email)
            .cloned())
    }

    async fn insert(&self, account: Account) -> Result<Account, StoreError> {
        self.check_available()?;
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        if accounts
            .iter()
            .any(|a| a.role == account.role && a.email == account.email)
        {
            return Err(StoreError::UniqueViolation(format!(
                "accounts(role, email) = ({}, {})",
                account.role, account.email
            )));
        }
        accounts.push(account.clone());
        Ok(account)
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, StoreError> {
        self.check_available()?;
        let accounts = self.accounts.read().map_err(poisoned)?;
        let matching: Vec<Account> = accounts.iter().filter(|a| a.role == role).cloned().collect();
        Ok(newest_first(&matching, |a| a.created_at))
    }

    async fn delete(&self, role: Role, id: AccountId) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let before = accounts.len();
        accounts.retain(|a| !(a.id == id && a.role == role));
        Ok(accounts.len() < before)
    }
}

#[async_trait]
impl TransactionStore for InMemoryStore {
    async fn insert(&self, transaction: Transaction) -> Result<Transaction, StoreError> {
        self.check_available()?;
        let mut transactions = self.transactions.write().map_err(poisoned)?;
        transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn list(&self, owner: Option<AccountId>) -> Result<Vec<Transaction>, StoreError> {
        self.check_available()?;
        let transactions = self.transactions.read().map_err(poisoned)?;
        let matching: Vec<Transaction> = transactions
            .iter()
            .filter(|t| owner.is_none_or(|o| t.owner_id == o))
            .cloned()
            .collect();
        Ok(newest_first(&matching, |t| t.created_at))
    }

    async fn delete(
        &self,
        id: TransactionId,
        owner: Option<AccountId>,
    ) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut transactions = self.transactions.write().map_err(poisoned)?;
        let before = transactions.len();
        transactions.retain(|t| !(t.id == id && owner.is_none_or(|o| t.owner_id == o)));
        Ok(transactions.len() < before)
    }
}
