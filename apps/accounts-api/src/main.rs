use accounts_api::{AppState, Config, build_router, state::connect_database};
use axum_helpers::{close_database, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::{Migrator, MigratorTrait};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let state = if config.database.url.is_some() {
        let db = connect_database(&config.database)
            .await
            .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

        Migrator::up(&db, None).await?;
        info!("Migrations applied");

        AppState::with_database(config, db)
    } else {
        warn!("DATABASE_URL not set, accounts are kept in memory");
        AppState::in_memory(config)
    };

    let router = build_router(&state)?;

    info!(
        "Starting {} v{} (login store: {})",
        state.config.app.name, state.config.app.version, state.config.auth_kind
    );

    let db = state.db.clone();
    create_production_app(router, &state.config.server, async move {
        if let Some(db) = db {
            close_database(db, "postgres").await;
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Accounts API shutdown complete");
    Ok(())
}
