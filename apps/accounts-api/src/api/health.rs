//! Readiness probe with a real datastore check.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::{HealthCheckFuture, database_check, run_health_checks};

use crate::state::AppState;

/// 200 when every configured datastore answers, 503 otherwise. The
/// in-memory stores have nothing to check.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();
    if let Some(db) = &state.db {
        checks.push(("database", database_check(db)));
    }

    run_health_checks(checks).await.into_response()
}
