//! Session authenticator: verifies credentials and issues session tokens.

use std::sync::Arc;

use tillbook_shared::{JwtService, Role};
use tracing::{info, instrument, warn};

use super::AuthError;
use super::password::verify_password_or_dummy;
use crate::account::AccountProfile;
use crate::directory::normalize_email;
use crate::store::AccountStore;

/// A successful login.
#[derive(Debug, Clone)]
pub struct Session {
    /// Signed bearer token.
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// The authenticated account.
    pub account: AccountProfile,
}

/// Verifies role-scoped credentials against the account store.
#[derive(Clone)]
pub struct SessionAuthenticator {
    accounts: Arc<dyn AccountStore>,
    jwt: JwtService,
}

impl std::fmt::Debug for SessionAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthenticator")
            .field("jwt", &self.jwt)
            .finish_non_exhaustive()
    }
}

impl SessionAuthenticator {
    /// Creates an authenticator.
    #[must_use]
    pub fn new(accounts: Arc<dyn AccountStore>, jwt: JwtService) -> Self {
        Self { accounts, jwt }
    }

    /// Authenticates `email`/`secret` for `role` and issues a token.
    ///
    /// An unknown account still runs a full hash verification, and both
    /// failure causes return the same error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` on any credential mismatch, `Store` if the
    /// lookup fails.
    #[instrument(skip(self, email, secret), fields(role = %role))]
    pub async fn authenticate(
        &self,
        role: Role,
        email: &str,
        secret: &str,
    ) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        let account = self.accounts.find_by_email(role, &email).await?;

        let verified = verify_password_or_dummy(
            secret,
            account.as_ref().map(|a| a.secret_hash.as_str()),
        )?;

        let Some(account) = account.filter(|_| verified) else {
            warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let issued = self.jwt.issue(account.id, role)?;
        info!(account_id = %account.id, "Login succeeded");

        Ok(Session {
            token: issued.token,
            expires_in: issued.expires_in,
            account: account.profile(),
        })
    }
}
