//! Accounts API
//!
//! Composes the accounts domain into one HTTP application:
//!
//! - `/auth/login`, `/auth/profile`
//! - `/users`, `/customers` (CRUD)
//! - `/health`, `/health/ready`
//!
//! Every route except the public ones requires `Authorization: Bearer <jwt>`.

use axum::{Router, middleware};
use axum_helpers::{AuthGuard, auth_guard, create_router};
use std::io;

pub mod api;
pub mod config;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Full application router: API routes behind the auth guard, plus the
/// shared middleware stack and JSON fallbacks.
pub fn build_router(state: &AppState) -> io::Result<Router> {
    let guard = AuthGuard::new(state.tokens.clone(), api::public_routes());

    let apis = api::routes(state).route_layer(middleware::from_fn_with_state(guard, auth_guard));

    create_router(apis)
}
