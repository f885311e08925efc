//! Schema CLI for the account tables.
//!
//! `DATABASE_URL=postgres://... cargo run -p migration -- up`

use migration::Migrator;

#[tokio::main]
async fn main() {
    sea_orm_migration::cli::run_cli(Migrator).await;
}
