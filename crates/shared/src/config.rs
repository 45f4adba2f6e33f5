//! Application configuration management.

use chrono::Duration;
use config::ConfigError;
use serde::Deserialize;

/// Longest accepted session lifetime, in seconds (one year).
pub const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtSettings,
    /// Optional administrator provisioned at startup.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// JWT configuration as loaded from files and environment.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Admin session lifetime in seconds.
    #[serde(default = "default_admin_ttl")]
    pub admin_ttl_secs: u64,
    /// Cashier session lifetime in seconds.
    #[serde(default = "default_cashier_ttl")]
    pub cashier_ttl_secs: u64,
}

impl JwtSettings {
    /// Admin session lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is within `1..=MAX_SESSION_TTL_SECS`.
    pub fn admin_ttl(&self) -> Result<Duration, ConfigError> {
        session_ttl("jwt.admin_ttl_secs", self.admin_ttl_secs)
    }

    /// Cashier session lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is within `1..=MAX_SESSION_TTL_SECS`.
    pub fn cashier_ttl(&self) -> Result<Duration, ConfigError> {
        session_ttl("jwt.cashier_ttl_secs", self.cashier_ttl_secs)
    }
}

fn session_ttl(key: &str, secs: u64) -> Result<Duration, ConfigError> {
    let out_of_range = || {
        ConfigError::Message(format!(
            "{key} must be between 1 and {MAX_SESSION_TTL_SECS} seconds, got {secs}"
        ))
    };
    if secs == 0 || secs > MAX_SESSION_TTL_SECS {
        return Err(out_of_range());
    }
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(out_of_range)
}

fn default_admin_ttl() -> u64 {
    3600 // 1 hour
}

fn default_cashier_ttl() -> u64 {
    86400 // 1 day
}

/// Administrator account ensured at startup.
///
/// Provisioning happens only when all three fields are set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BootstrapConfig {
    /// Admin email.
    pub admin_email: Option<String>,
    /// Admin display name.
    pub admin_name: Option<String>,
    /// Admin secret (plaintext, hashed before storage).
    pub admin_secret: Option<String>,
}

/// A fully specified bootstrap administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdmin {
    /// Admin email.
    pub email: String,
    /// Admin display name.
    pub name: String,
    /// Admin secret.
    pub secret: String,
}

impl BootstrapConfig {
    /// Returns the bootstrap admin when every field is present.
    #[must_use]
    pub fn admin(&self) -> Option<BootstrapAdmin> {
        match (&self.admin_email, &self.admin_name, &self.admin_secret) {
            (Some(email), Some(name), Some(secret)) => Some(BootstrapAdmin {
                email: email.clone(),
                name: name.clone(),
                secret: secret.clone(),
            }),
            _ => None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or a session
    /// lifetime is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TILLBOOK").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.jwt.admin_ttl()?;
        config.jwt.cashier_ttl()?;
        Ok(config)
    }
}
