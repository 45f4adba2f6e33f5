//! Account repository for the credential store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tillbook_core::{Account, AccountStore, StoreError};
use tillbook_shared::{Role, types::AccountId};

use super::map_db_err;
use crate::entities::{accounts, sea_orm_active_enums::AccountRole};

/// Account repository backed by Postgres.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<Role> for AccountRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Cashier => Self::Cashier,
        }
    }
}

impl From<AccountRole> for Role {
    fn from(role: AccountRole) -> Self {
        match role {
            AccountRole::Admin => Self::Admin,
            AccountRole::Cashier => Self::Cashier,
        }
    }
}

impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Self {
            id: AccountId::from_uuid(model.id),
            role: model.role.into(),
            name: model.name,
            email: model.email,
            secret_hash: model.secret_hash,
            created_at: model.created_at.to_utc(),
        }
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_email(&self, role: Role, email: &str) -> Result<Option<Account>, StoreError> {
        accounts::Entity::find()
            .filter(accounts::Column::Role.eq(AccountRole::from(role)))
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map(|model| model.map(Account::from))
            .map_err(map_db_err)
    }

    async fn insert(&self, account: Account) -> Result<Account, StoreError> {
        // Single INSERT; uq_accounts_role_email rejects duplicates atomically.
        let model = accounts::ActiveModel {
            id: Set(account.id.into_inner()),
            role: Set(account.role.into()),
            name: Set(account.name),
            email: Set(account.email),
            secret_hash: Set(account.secret_hash),
            created_at: Set(account.created_at.into()),
        };

        model
            .insert(&self.db)
            .await
            .map(Account::from)
            .map_err(map_db_err)
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>, StoreError> {
        accounts::Entity::find()
            .filter(accounts::Column::Role.eq(AccountRole::from(role)))
            .order_by_desc(accounts::Column::CreatedAt)
            .order_by_desc(accounts::Column::Id)
            .all(&self.db)
            .await
            .map(|models| models.into_iter().map(Account::from).collect())
            .map_err(map_db_err)
    }

    async fn delete(&self, role: Role, id: AccountId) -> Result<bool, StoreError> {
        let result = accounts::Entity::delete_many()
            .filter(accounts::Column::Id.eq(id.into_inner()))
            .filter(accounts::Column::Role.eq(AccountRole::from(role)))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}
