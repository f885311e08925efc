//! Accounts Domain
//!
//! Registration, lookup, update and removal of accounts, plus password
//! sign-in that issues a signed access token.
//!
//! Two account kinds share one shape: `users` and `customers`. Each kind
//! has its own store and its own router; messages name the kind
//! ("Customer already exists!").
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, Either → response
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Clone-able entry point, builds a use case per call
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← Either<DomainError, T> for expected failures
//! └──────┬──────┘
//!        │
//! ┌──────▼──────────────────────────┐
//! │ Repository / Hasher / Tokens    │  ← traits + implementations
//! └─────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_accounts::{
//!     AccountKind, AccountService, Argon2PasswordHasher, InMemoryAccountRepository, handlers,
//! };
//!
//! let repository = Arc::new(InMemoryAccountRepository::new(AccountKind::Customer));
//! let service = AccountService::new(
//!     AccountKind::Customer,
//!     repository,
//!     Arc::new(Argon2PasswordHasher::new()),
//! );
//!
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod auth_handlers;
pub mod either;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod use_cases;

pub use either::{Either, left, right};
pub use error::{AccountError, AccountResult, DomainError};
pub use models::{
    AccessToken, Account, AccountFilter, AccountKind, AccountResponse, CreateAccount,
    LoginRequest, UpdateAccount,
};
pub use password::{Argon2PasswordHasher, PasswordHasher};
pub use postgres::PostgresAccountRepository;
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use service::{AccountService, AuthService};
