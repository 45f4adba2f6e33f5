//! Ledger service: append, list and delete transactions and derive balances.
//!
//! Each operation is exactly one store call. Concurrent records for the same
//! owner are independent appends; balances are recomputed from the rows.

use std::sync::Arc;

use chrono::Utc;
use tillbook_shared::types::{AccountId, TransactionId};
use tracing::{info, instrument};

use super::balance::BalanceSummary;
use super::error::LedgerError;
use super::transaction::Transaction;
use super::validation::{RecordTransactionInput, validate_record};
use crate::store::TransactionStore;

/// Ledger service over a transaction store.
#[derive(Clone)]
pub struct LedgerService {
    transactions: Arc<dyn TransactionStore>,
}

impl std::fmt::Debug for LedgerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerService").finish_non_exhaustive()
    }
}

impl LedgerService {
    /// Creates a ledger service.
    #[must_use]
    pub fn new(transactions: Arc<dyn TransactionStore>) -> Self {
        Self { transactions }
    }

    /// Validates and appends a transaction with a server-assigned id and time.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before the store is touched.
    #[instrument(skip(self, input), fields(owner_id = %input.owner_id))]
    pub async fn record(&self, input: RecordTransactionInput) -> Result<Transaction, LedgerError> {
        let valid = validate_record(&input)?;

        let transaction = Transaction {
            id: TransactionId::new(),
            owner_id: valid.owner_id,
            owner_name: valid.owner_name,
            amount: valid.amount,
            kind: valid.kind,
            description: valid.description,
            created_at: Utc::now(),
        };

        let stored = self.transactions.insert(transaction).await?;
        info!(
            transaction_id = %stored.id,
            kind = %stored.kind,
            amount = %stored.amount,
            "Transaction recorded"
        );
        Ok(stored)
    }

    /// Lists one owner's transactions, newest first.
    pub async fn list_by_owner(&self, owner_id: AccountId) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.transactions.list(Some(owner_id)).await?)
    }

    /// Lists every transaction, newest first.
    pub async fn list_all(&self) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.transactions.list(None).await?)
    }

    /// Deletes a transaction by id.
    ///
    /// With `scope` set, only a transaction owned by that account is deleted;
    /// anything else reports not found.
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` if nothing was deleted.
    pub async fn remove(
        &self,
        id: TransactionId,
        scope: Option<AccountId>,
    ) -> Result<(), LedgerError> {
        if self.transactions.delete(id, scope).await? {
            info!(transaction_id = %id, "Transaction deleted");
            Ok(())
        } else {
            Err(LedgerError::TransactionNotFound(id))
        }
    }

    /// Derives the balance summary for one owner, or for everyone.
    pub async fn summary(&self, owner_id: Option<AccountId>) -> Result<BalanceSummary, LedgerError> {
        let transactions = self.transactions.list(owner_id).await?;
        Ok(BalanceSummary::from_transactions(&transactions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use crate::store::InMemoryStore;
    use futures::future::join_all;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn service() -> LedgerService {
        LedgerService::new(Arc::new(InMemoryStore::new()))
    }

    fn input(owner_id: AccountId, amount: Decimal, kind: &str) -> RecordTransactionInput {
        RecordTransactionInput {
            owner_id,
            owner_name: "Ada".to_string(),
            amount,
            kind: kind.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_record_then_list_returns_entry_first() {
        let ledger = service();
        let owner = AccountId::new();
        ledger.record(input(owner, dec!(5), "income")).await.unwrap();
        let recorded = ledger.record(input(owner, dec!(0.01), "sale")).await.unwrap();

        let listed = ledger.list_by_owner(owner).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], recorded);
        assert_eq!(listed.iter().filter(|t| t.id == recorded.id).count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_record_does_not_touch_store() {
        let store = Arc::new(InMemoryStore::new());
        let ledger = LedgerService::new(store.clone());
        store.set_unavailable(true);

        let err = ledger
            .record(input(AccountId::new(), dec!(0), "sale"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let ledger = service();
        let recorded = ledger
            .record(input(AccountId::new(), dec!(10), "refund"))
            .await
            .unwrap();

        ledger.remove(recorded.id, None).await.unwrap();
        let err = ledger.remove(recorded.id, None).await.unwrap_err();
        assert!(matches!(err, LedgerError::TransactionNotFound(id) if id == recorded.id));
    }

    #[tokio::test]
    async fn test_scoped_remove_reports_not_found_for_foreign_entry() {
        let ledger = service();
        let owner = AccountId::new();
        let recorded = ledger.record(input(owner, dec!(10), "sale")).await.unwrap();

        let err = ledger
            .remove(recorded.id, Some(AccountId::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::TransactionNotFound(_)));
        assert_eq!(ledger.list_by_owner(owner).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_summary_per_owner_and_global() {
        let ledger = service();
        let ada = AccountId::new();
        let bob = AccountId::new();
        ledger.record(input(ada, dec!(500), "sale")).await.unwrap();
        ledger.record(input(ada, dec!(200), "expense")).await.unwrap();
        ledger.record(input(bob, dec!(50), "income")).await.unwrap();

        let ada_summary = ledger.summary(Some(ada)).await.unwrap();
        assert_eq!(ada_summary.total_in, dec!(500));
        assert_eq!(ada_summary.total_out, dec!(200));
        assert_eq!(ada_summary.balance, dec!(300));

        let all = ledger.summary(None).await.unwrap();
        assert_eq!(all.balance, dec!(350));
        assert_eq!(all.count, 3);
    }

    #[tokio::test]
    async fn test_concurrent_records_are_independent_appends() {
        let ledger = service();
        let owner = AccountId::new();

        let results = join_all((0..50).map(|_| ledger.record(input(owner, dec!(1), "sale")))).await;
        assert!(results.iter().all(Result::is_ok));

        let summary = ledger.summary(Some(owner)).await.unwrap();
        assert_eq!(summary.count, 50);
        assert_eq!(summary.balance, dec!(50));
        assert!(
            ledger
                .list_all()
                .await
                .unwrap()
                .iter()
                .all(|t| t.kind == TransactionKind::Sale)
        );
    }
}
