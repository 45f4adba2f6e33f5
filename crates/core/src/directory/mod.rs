//! Cashier directory.
//!
//! Registration, listing and deletion of role-scoped accounts. Creation is a
//! single insert; the store's uniqueness constraint decides duplicates.

pub mod error;
pub mod validation;

pub use error::DirectoryError;
pub use validation::{NewAccount, normalize_email};

use std::sync::Arc;

use tillbook_shared::{Role, types::AccountId};
use tracing::{info, instrument};

use crate::account::{Account, AccountProfile};
use crate::auth::hash_password;
use crate::store::{AccountStore, StoreError};

/// Directory service over an account store.
#[derive(Clone)]
pub struct DirectoryService {
    accounts: Arc<dyn AccountStore>,
}

impl std::fmt::Debug for DirectoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryService").finish_non_exhaustive()
    }
}

impl DirectoryService {
    /// Creates a directory service.
    #[must_use]
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Lists cashier accounts, newest first.
    pub async fn list(&self) -> Result<Vec<AccountProfile>, DirectoryError> {
        let accounts = self.accounts.list_by_role(Role::Cashier).await?;
        Ok(accounts.into_iter().map(AccountProfile::from).collect())
    }

    /// Registers a cashier.
    ///
    /// # Errors
    ///
    /// - `Validation` before any store call
    /// - `DuplicateEmail` if a cashier with the email exists
    #[instrument(skip(self, name, email, secret))]
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        secret: &str,
    ) -> Result<AccountProfile, DirectoryError> {
        let input = NewAccount::parse(name, email, secret)?;
        let account = self.register(Role::Cashier, input).await?;
        info!(account_id = %account.id, email = %account.email, "Cashier created");
        Ok(account)
    }

    /// Deletes a cashier. Their transactions are left in place.
    ///
    /// # Errors
    ///
    /// Returns `CashierNotFound` if no cashier has this id, including when the
    /// id belongs to an administrator.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: AccountId) -> Result<(), DirectoryError> {
        if self.accounts.delete(Role::Cashier, id).await? {
            info!(account_id = %id, "Cashier deleted");
            Ok(())
        } else {
            Err(DirectoryError::CashierNotFound(id))
        }
    }

    /// Makes sure an administrator with this email exists.
    ///
    /// Returns the account and whether it was created by this call. An
    /// existing account is left untouched, secret included.
    pub async fn ensure_admin(
        &self,
        name: &str,
        email: &str,
        secret: &str,
    ) -> Result<(AccountProfile, bool), DirectoryError> {
        let input = NewAccount::parse(name, email, secret)?;
        if let Some(existing) = self.accounts.find_by_email(Role::Admin, &input.email).await? {
            return Ok((existing.profile(), false));
        }

        let email = input.email.clone();
        match self.register(Role::Admin, input).await {
            Ok(account) => {
                info!(account_id = %account.id, "Administrator provisioned");
                Ok((account, true))
            }
            Err(DirectoryError::DuplicateEmail(_)) => {
                // Lost a race with another provisioner.
                let existing = self
                    .accounts
                    .find_by_email(Role::Admin, &email)
                    .await?
                    .ok_or_else(|| DirectoryError::DuplicateEmail(email.clone()))?;
                Ok((existing.profile(), false))
            }
            Err(e) => Err(e),
        }
    }

    async fn register(
        &self,
        role: Role,
        input: NewAccount,
    ) -> Result<AccountProfile, DirectoryError> {
        let secret_hash = hash_password(&input.secret)?;
        let account = Account::new(role, &input.name, &input.email, secret_hash);

        match self.accounts.insert(account).await {
            Ok(stored) => Ok(stored.profile()),
            Err(StoreError::UniqueViolation(_)) => Err(DirectoryError::DuplicateEmail(input.email)),
            Err(e) => Err(e.into()),
        }
    }
}
