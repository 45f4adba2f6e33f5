//! Session roles and JWT claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::AccountId;

/// The two roles an account can hold.
///
/// Role comparisons happen only through this enum; the wire form is the
/// lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages cashier accounts and sees every ledger entry.
    Admin,
    /// Records transactions and sees their own ledger.
    Cashier,
}

impl Role {
    /// Returns the lowercase role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Cashier => "cashier",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "cashier" => Ok(Self::Cashier),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}

/// JWT claims for session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID).
    pub sub: AccountId,
    /// Role the session was issued for.
    pub role: Role,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an account.
    #[must_use]
    pub fn new(subject: AccountId, role: Role, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: subject,
            role,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the account ID from claims.
    #[must_use]
    pub const fn subject_id(&self) -> AccountId {
        self.sub
    }
}
