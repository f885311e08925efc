//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT issuance/verification, public route registry, global auth guard
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::{FromEnv, server::ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let router = create_router(api_routes)?;
//!     create_production_app(router, &ServerConfig::from_env()?, async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{
    AuthGuard, JwtAuth, JwtConfig, PublicRoutes, TokenClaims, TokenIssuer, TokenPayload,
    auth_guard,
};

pub use server::{
    HealthCheckFuture, ShutdownCoordinator, close_database, create_production_app, create_router,
    database_check, health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{UuidPath, ValidatedJson};
