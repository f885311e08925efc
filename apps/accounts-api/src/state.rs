//! Application state management.
//!
//! Collaborators are built once here and shared by every router through
//! `Arc`. Stores are trait objects so the binary can choose Postgres or
//! memory at startup.

use axum_helpers::{JwtAuth, TokenIssuer};
use core_config::database::DatabaseConfig;
use domain_accounts::{
    AccountKind, AccountRepository, Argon2PasswordHasher, AuthService, AccountService,
    InMemoryAccountRepository, PasswordHasher, PostgresAccountRepository,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;

use crate::config::Config;

pub type SharedRepository = Arc<dyn AccountRepository>;
pub type SharedHasher = Arc<dyn PasswordHasher>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Present only when `DATABASE_URL` is set
    pub db: Option<DatabaseConnection>,
    pub users: SharedRepository,
    pub customers: SharedRepository,
    pub hasher: SharedHasher,
    pub tokens: Arc<JwtAuth>,
}

impl AppState {
    /// Stores kept in process memory.
    pub fn in_memory(config: Config) -> Self {
        Self::build(
            config,
            None,
            Arc::new(InMemoryAccountRepository::new(AccountKind::User)),
            Arc::new(InMemoryAccountRepository::new(AccountKind::Customer)),
        )
    }

    /// Stores backed by the `users` and `customers` tables.
    pub fn with_database(config: Config, db: DatabaseConnection) -> Self {
        Self::build(
            config,
            Some(db.clone()),
            Arc::new(PostgresAccountRepository::new(db.clone(), AccountKind::User)),
            Arc::new(PostgresAccountRepository::new(db, AccountKind::Customer)),
        )
    }

    fn build(
        config: Config,
        db: Option<DatabaseConnection>,
        users: SharedRepository,
        customers: SharedRepository,
    ) -> Self {
        let tokens = Arc::new(JwtAuth::new(&config.jwt));

        Self {
            config,
            db,
            users,
            customers,
            hasher: Arc::new(Argon2PasswordHasher::new()),
            tokens,
        }
    }

    pub fn repository(&self, kind: AccountKind) -> SharedRepository {
        match kind {
            AccountKind::User => Arc::clone(&self.users),
            AccountKind::Customer => Arc::clone(&self.customers),
        }
    }

    pub fn account_service(
        &self,
        kind: AccountKind,
    ) -> AccountService<dyn AccountRepository, dyn PasswordHasher> {
        AccountService::new(kind, self.repository(kind), Arc::clone(&self.hasher))
    }

    pub fn auth_service(
        &self,
    ) -> AuthService<dyn AccountRepository, dyn PasswordHasher, dyn TokenIssuer> {
        let tokens: Arc<dyn TokenIssuer> = self.tokens.clone();
        AuthService::new(
            self.repository(self.config.auth_kind),
            Arc::clone(&self.hasher),
            tokens,
        )
    }
}

/// Opens the connection pool described by `config`.
pub async fn connect_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| DbErr::Custom("DATABASE_URL is not set".to_string()))?;

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    Database::connect(options).await
}
