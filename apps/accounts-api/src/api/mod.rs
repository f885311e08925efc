use axum::{Router, http::Method, routing::get};
use axum_helpers::{PublicRoutes, health_router};
use domain_accounts::{AccountKind, auth_handlers, handlers};

use crate::state::AppState;

pub mod health;

/// All API routes. The auth guard is layered on top by
/// [`crate::build_router`].
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/auth", auth_handlers::router(state.auth_service()))
        .nest(
            "/users",
            handlers::router(state.account_service(AccountKind::User)),
        )
        .nest(
            "/customers",
            handlers::router(state.account_service(AccountKind::Customer)),
        )
        .nest(
            "/health",
            health_router(state.config.app).merge(ready_router(state.clone())),
        )
}

/// Routes reachable without a bearer token.
pub fn public_routes() -> PublicRoutes {
    PublicRoutes::new()
        .route(Method::POST, "/auth/login")
        .route(Method::POST, "/users")
        .route(Method::POST, "/customers")
        .group("/health")
}

/// `/ready` with real datastore checks, nested under `/health`.
fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
