//! Access guard: token validation and role checks.
//!
//! The guard trusts the role embedded in a verified token and never touches
//! the credential store, so every check here is side-effect free.

use serde::Serialize;
use tillbook_shared::{JwtService, Role, types::AccountId};

use super::AuthError;

/// The authenticated caller, attached to each request after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Account the token was issued to.
    pub subject_id: AccountId,
    /// Role the token was issued for.
    pub role: Role,
}

impl Identity {
    /// Returns true for administrator sessions.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// # Errors
///
/// Returns `MissingToken` if the header is absent, uses another scheme, or
/// carries an empty token.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// Validates the bearer token and, if given, the required role.
///
/// # Errors
///
/// - `MissingToken` when no bearer token is present
/// - `InvalidToken` on a bad signature or malformed token
/// - `ExpiredToken` when the token is past its expiry
/// - `Forbidden` when the role does not match `required`
pub fn authorize(
    jwt: &JwtService,
    header: Option<&str>,
    required: Option<Role>,
) -> Result<Identity, AuthError> {
    let token = extract_bearer_token(header)?;
    let claims = jwt.validate_token(token)?;

    let identity = Identity {
        subject_id: claims.subject_id(),
        role: claims.role,
    };

    if let Some(role) = required {
        require_role(&identity, role)?;
    }
    Ok(identity)
}

/// Checks that the identity holds `role`.
///
/// # Errors
///
/// Returns `Forbidden` on mismatch.
pub fn require_role(identity: &Identity, role: Role) -> Result<(), AuthError> {
    if identity.role == role {
        Ok(())
    } else {
        Err(AuthError::Forbidden(format!("{role} role required")))
    }
}

/// Checks that the identity is the owner or an administrator.
///
/// # Errors
///
/// Returns `Forbidden` when a cashier targets another owner.
pub fn authorize_owner(identity: &Identity, owner_id: AccountId) -> Result<(), AuthError> {
    if identity.is_admin() || identity.subject_id == owner_id {
        Ok(())
    } else {
        Err(AuthError::Forbidden(
            "cashiers may only access their own ledger".to_string(),
        ))
    }
}
