//! Database bootstrap: connect and migrate in one entrypoint.

use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the configured database and bring the schema up to date.
///
/// Pool sizing mirrors the platform's settings: up to 20 connections, 10s
/// connect timeout, 30s idle timeout.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let conn = connect(url).await?;

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    info!("database connected and migrated");
    Ok(conn)
}

/// Connect to a fresh in-memory SQLite database and apply migrations.
/// A single pooled connection keeps the database alive and shared.
pub async fn bootstrap_sqlite_memory() -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1).sqlx_logging(false);

    let conn = Database::connect(opts)
        .await
        .map_err(|e| AppError::db(format!("failed to open sqlite memory db: {e}")))?;

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    Ok(conn)
}

async fn connect(url: String) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(20)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(30))
        .sqlx_logging(false);

    Database::connect(opts)
        .await
        .map_err(|e| AppError::db(format!("failed to connect to database: {e}")))
}
