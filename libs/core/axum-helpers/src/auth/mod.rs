//! Authentication: JWT issuance/verification, the public route registry and
//! the global guard middleware.
//!
//! ```ignore
//! use axum_helpers::auth::{AuthGuard, JwtAuth, JwtConfig, PublicRoutes, auth_guard};
//! use core_config::FromEnv;
//!
//! let jwt = JwtAuth::new(&JwtConfig::from_env()?);
//! let public = PublicRoutes::new().route(Method::POST, "/auth/login");
//! let app = routes.route_layer(axum::middleware::from_fn_with_state(
//!     AuthGuard::new(Arc::new(jwt), public),
//!     auth_guard,
//! ));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod public;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, TokenClaims, TokenIssuer, TokenPayload};
pub use middleware::{AuthGuard, BearerError, UNAUTHORIZED_MESSAGE, auth_guard, extract_bearer_token};
pub use public::PublicRoutes;
