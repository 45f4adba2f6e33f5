//! Account records held by the credential store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tillbook_shared::{Role, types::AccountId};

/// A stored account, secret hash included.
///
/// Never serialized; use [`AccountProfile`] for anything leaving the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Role the account can log in as.
    pub role: Role,
    /// Display name.
    pub name: String,
    /// Normalized email, unique within the role.
    pub email: String,
    /// Argon2id PHC string.
    pub secret_hash: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Builds a new account with a fresh id and the current time.
    #[must_use]
    pub fn new(role: Role, name: &str, email: &str, secret_hash: String) -> Self {
        Self {
            id: AccountId::new(),
            role,
            name: name.to_string(),
            email: email.to_string(),
            secret_hash,
            created_at: Utc::now(),
        }
    }

    /// Returns the public view of this account.
    #[must_use]
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id,
            role: self.role,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Account fields safe to return to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    /// Account ID.
    pub id: AccountId,
    /// Account role.
    pub role: Role,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            role: account.role,
            name: account.name,
            email: account.email,
            created_at: account.created_at,
        }
    }
}
