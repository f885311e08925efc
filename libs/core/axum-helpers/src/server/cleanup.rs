use tracing::{error, info};

/// Closes a sea-orm connection pool during shutdown.
///
/// The pool also closes on drop; closing explicitly lets the outcome be
/// logged.
pub async fn close_database(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("Database connection '{}' closed successfully", name),
        Err(e) => error!("Error closing database connection '{}': {}", name, e),
    }
}
