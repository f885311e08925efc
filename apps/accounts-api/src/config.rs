use axum_helpers::JwtConfig;
use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, database::DatabaseConfig, env_or_default,
    server::ServerConfig,
};
use domain_accounts::AccountKind;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    /// `url: None` keeps accounts in memory
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    /// Store that `/auth/login` signs in against
    pub auth_kind: AccountKind,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let database = DatabaseConfig::from_env()?; // Optional
        let jwt = JwtConfig::from_env()?; // Required - will fail if JWT_SECRET is not set

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            database,
            jwt,
            auth_kind: auth_kind_from_env()?,
        })
    }
}

fn auth_kind_from_env() -> Result<AccountKind, ConfigError> {
    env_or_default("AUTH_ACCOUNT_KIND", "customer")
        .parse()
        .map_err(|details| ConfigError::ParseError {
            key: "AUTH_ACCOUNT_KIND".to_string(),
            details,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "config-test-secret-0123456789abcdef";

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(SECRET)),
                ("DATABASE_URL", None),
                ("AUTH_ACCOUNT_KIND", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "accounts_api");
                assert_eq!(config.auth_kind, AccountKind::Customer);
                assert!(config.database.url.is_none());
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_config_reads_auth_kind() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(SECRET)),
                ("AUTH_ACCOUNT_KIND", Some("users")),
            ],
            || {
                assert_eq!(Config::from_env().unwrap().auth_kind, AccountKind::User);
            },
        );
    }

    #[test]
    fn test_config_rejects_unknown_auth_kind() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(SECRET)),
                ("AUTH_ACCOUNT_KIND", Some("admins")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("AUTH_ACCOUNT_KIND"));
            },
        );
    }

    #[test]
    fn test_config_requires_jwt_secret() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }
}
