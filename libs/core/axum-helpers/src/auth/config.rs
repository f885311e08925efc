//! JWT configuration loaded through `core_config::FromEnv`.

use core_config::{ConfigError, FromEnv, env_parse_or_default, env_required};
use std::time::Duration;

/// Minimum accepted length of `JWT_SECRET`.
pub const MIN_SECRET_LEN: usize = 32;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - at least 32 characters
/// - `JWT_EXPIRES_IN` (optional) - access token lifetime in seconds, default 3600
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in: Duration,
}

impl JwtConfig {
    /// Builds a config with the default one hour lifetime.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        validate_secret(&secret)?;

        Ok(Self {
            secret,
            expires_in: Duration::from_secs(3600),
        })
    }

    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

fn validate_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {} characters (got {}). Generate one with: openssl rand -base64 32",
                MIN_SECRET_LEN,
                secret.len()
            ),
        });
    }
    Ok(())
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        validate_secret(&secret)?;

        let expires_in: u64 = env_parse_or_default("JWT_EXPIRES_IN", "3600")?;
        if expires_in == 0 {
            return Err(ConfigError::ParseError {
                key: "JWT_EXPIRES_IN".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            secret,
            expires_in: Duration::from_secs(expires_in),
        })
    }
}
