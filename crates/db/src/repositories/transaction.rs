//! Transaction repository for the ledger.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tillbook_core::{StoreError, Transaction, TransactionKind, TransactionStore};
use tillbook_shared::types::{AccountId, Amount, TransactionId};

use super::map_db_err;
use crate::entities::{sea_orm_active_enums::TransactionKind as DbTransactionKind, transactions};

/// Transaction repository backed by Postgres.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<TransactionKind> for DbTransactionKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Sale => Self::Sale,
            TransactionKind::Refund => Self::Refund,
            TransactionKind::Void => Self::Void,
            TransactionKind::Income => Self::Income,
            TransactionKind::Expense => Self::Expense,
        }
    }
}

impl From<DbTransactionKind> for TransactionKind {
    fn from(kind: DbTransactionKind) -> Self {
        match kind {
            DbTransactionKind::Sale => Self::Sale,
            DbTransactionKind::Refund => Self::Refund,
            DbTransactionKind::Void => Self::Void,
            DbTransactionKind::Income => Self::Income,
            DbTransactionKind::Expense => Self::Expense,
        }
    }
}

fn to_domain(model: transactions::Model) -> Result<Transaction, StoreError> {
    let amount = Amount::new(model.amount).map_err(|e| {
        StoreError::Backend(format!("transaction {} has invalid amount: {e}", model.id))
    })?;

    Ok(Transaction {
        id: TransactionId::from_uuid(model.id),
        owner_id: AccountId::from_uuid(model.owner_id),
        owner_name: model.owner_name,
        amount,
        kind: model.kind.into(),
        description: model.description,
        created_at: model.created_at.to_utc(),
    })
}

#[async_trait]
impl TransactionStore for TransactionRepository {
    async fn insert(&self, transaction: Transaction) -> Result<Transaction, StoreError> {
        let model = transactions::ActiveModel {
            id: Set(transaction.id.into_inner()),
            owner_id: Set(transaction.owner_id.into_inner()),
            owner_name: Set(transaction.owner_name),
            amount: Set(transaction.amount.value()),
            kind: Set(transaction.kind.into()),
            description: Set(transaction.description),
            created_at: Set(transaction.created_at.into()),
        };

        let stored = model.insert(&self.db).await.map_err(map_db_err)?;
        to_domain(stored)
    }

    async fn list(&self, owner: Option<AccountId>) -> Result<Vec<Transaction>, StoreError> {
        let mut query = transactions::Entity::find();
        if let Some(owner) = owner {
            query = query.filter(transactions::Column::OwnerId.eq(owner.into_inner()));
        }

        query
            .order_by_desc(transactions::Column::CreatedAt)
            .order_by_desc(transactions::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn delete(
        &self,
        id: TransactionId,
        owner: Option<AccountId>,
    ) -> Result<bool, StoreError> {
        let mut query =
            transactions::Entity::delete_many().filter(transactions::Column::Id.eq(id.into_inner()));
        if let Some(owner) = owner {
            query = query.filter(transactions::Column::OwnerId.eq(owner.into_inner()));
        }

        let result = query.exec(&self.db).await.map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}
