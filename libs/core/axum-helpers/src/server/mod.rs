//! Server infrastructure:
//! - router assembly with cross-cutting middleware
//! - liveness and readiness endpoints
//! - graceful shutdown with a drain timeout
//! - connection cleanup
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let routes = api_routes.nest("/health", health_router(app_info!()));
//! let router = create_router(routes)?;
//! create_production_app(router, &server_config, async {}).await?;
//! ```

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use cleanup::close_database;
pub use health::{
    HealthCheckFuture, HealthResponse, database_check, health_handler, health_router,
    run_health_checks,
};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
