use crate::{env_parse_or_default, ConfigError, FromEnv};
use std::env;

/// Database configuration.
///
/// `DATABASE_URL` is optional: when it is unset the service keeps its
/// accounts in process memory.
#[derive(Clone, Debug, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            max_connections: 10,
        }
    }

    /// No database; accounts live in memory.
    pub fn in_memory() -> Self {
        Self {
            url: None,
            max_connections: 0,
        }
    }
}

impl FromEnv for DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let max_connections = env_parse_or_default("DATABASE_MAX_CONNECTIONS", "10")?;

        Ok(Self {
            url,
            max_connections,
        })
    }
}
