//! JWT token generation and validation.
//!
//! Session tokens are stateless: they carry the subject and role, are signed
//! with HS256 and expire after a per-role lifetime.

use chrono::{DateTime, Duration, Utc};
use config::ConfigError;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::auth::{Claims, Role};
use crate::config::JwtSettings;
use crate::types::AccountId;

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Admin session lifetime.
    pub admin_ttl: Duration,
    /// Cashier session lifetime.
    pub cashier_ttl: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            admin_ttl: Duration::hours(1),
            cashier_ttl: Duration::days(1),
        }
    }
}

impl TryFrom<&JwtSettings> for JwtConfig {
    type Error = ConfigError;

    fn try_from(settings: &JwtSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            secret: settings.secret.clone(),
            admin_ttl: settings.admin_ttl()?,
            cashier_ttl: settings.cashier_ttl()?,
        })
    }
}

impl JwtConfig {
    /// Returns the session lifetime for a role.
    #[must_use]
    pub fn ttl_for(&self, role: Role) -> Duration {
        match role {
            Role::Admin => self.admin_ttl,
            Role::Cashier => self.cashier_ttl,
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,

    /// Token is malformed or its signature does not verify.
    #[error("invalid token: {0}")]
    Invalid(String),
}

/// A freshly signed session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The encoded token.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("admin_ttl", &self.config.admin_ttl)
            .field("cashier_ttl", &self.config.cashier_ttl)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issues a session token bound to `subject` and `role`.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails or the
    /// expiry is not representable.
    pub fn issue(&self, subject: AccountId, role: Role) -> Result<IssuedToken, JwtError> {
        let ttl = self.config.ttl_for(role);
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::EncodingError(format!("{role} session lifetime overflows")))?;
        let token = self.encode_claims(&Claims::new(subject, role, expires_at))?;

        Ok(IssuedToken {
            token,
            expires_at,
            expires_in: ttl.num_seconds(),
        })
    }

    /// Signs arbitrary claims.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates and decodes a token.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` if the token has expired.
    /// Returns `JwtError::Invalid` if the token is malformed or tampered with.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            })
    }

    /// Returns the session lifetime in seconds for a role.
    #[must_use]
    pub fn expires_in(&self, role: Role) -> i64 {
        self.config.ttl_for(role).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            admin_ttl: Duration::hours(1),
            cashier_ttl: Duration::days(1),
        })
    }

    #[test]
    fn test_issue_and_validate() {
        let service = create_test_service();
        let subject = AccountId::new();

        let issued = service.issue(subject, Role::Cashier).unwrap();
        assert!(!issued.token.is_empty());

        let claims = service.validate_token(&issued.token).unwrap();
        assert_eq!(claims.subject_id(), subject);
        assert_eq!(claims.role, Role::Cashier);
    }

    #[test]
    fn test_ttl_is_role_specific() {
        let service = create_test_service();

        let admin = service.issue(AccountId::new(), Role::Admin).unwrap();
        let cashier = service.issue(AccountId::new(), Role::Cashier).unwrap();

        assert_eq!(admin.expires_in, 3600);
        assert_eq!(cashier.expires_in, 86400);
        assert_eq!(service.expires_in(Role::Admin), 3600);
    }

    #[test]
    fn test_expired_token() {
        let service = create_test_service();
        let claims = Claims {
            sub: AccountId::new(),
            role: Role::Admin,
            iat: (Utc::now() - Duration::hours(2)).timestamp(),
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
        };
        let token = service.encode_claims(&claims).unwrap();

        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::Expired)
        ));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_invalid() {
        let service = create_test_service();
        let other = JwtService::new(JwtConfig {
            secret: "another-secret".to_string(),
            ..JwtConfig::default()
        });
        let issued = other.issue(AccountId::new(), Role::Admin).unwrap();

        assert!(matches!(
            service.validate_token(&issued.token),
            Err(JwtError::Invalid(_))
        ));
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_from_settings() {
        let settings = JwtSettings {
            secret: "s".into(),
            admin_ttl_secs: 60,
            cashier_ttl_secs: 120,
        };
        let config = JwtConfig::try_from(&settings).unwrap();
        assert_eq!(config.ttl_for(Role::Admin), Duration::seconds(60));
        assert_eq!(config.ttl_for(Role::Cashier), Duration::seconds(120));
    }

    #[test]
    fn test_from_settings_rejects_huge_ttl() {
        let settings = JwtSettings {
            secret: "s".into(),
            admin_ttl_secs: 60,
            cashier_ttl_secs: u64::MAX,
        };
        let err = JwtConfig::try_from(&settings).unwrap_err();
        assert!(err.to_string().contains("jwt.cashier_ttl_secs"), "{err}");
    }

    #[test]
    fn test_issue_with_unrepresentable_expiry_fails() {
        let service = JwtService::new(JwtConfig {
            secret: "s".to_string(),
            admin_ttl: Duration::MAX,
            cashier_ttl: Duration::days(1),
        });
        assert!(matches!(
            service.issue(AccountId::new(), Role::Admin),
            Err(JwtError::EncodingError(_))
        ));
    }
}
