//! SQLite pool construction and schema bootstrap.

use std::str::FromStr;
use std::time::Duration;

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, Schema, SqlxSqliteConnector, Statement,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::config::db::{DbLocation, DbSettings};
use crate::entities::sleepers;
use crate::error::AppError;

/// Open the pool described by `settings`. Does NOT touch the schema.
pub async fn connect_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    let busy_timeout = Duration::from_millis(settings.busy_timeout_ms);

    let (connect_opts, pool_opts, path) = match &settings.location {
        DbLocation::File(path) => {
            let opts = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(busy_timeout);
            let pool = SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(settings.pool_max);
            (opts, pool, path.display().to_string())
        }
        // Every connection to :memory: is a separate database, so pin the
        // pool to one connection that never expires.
        DbLocation::Memory => {
            let opts = SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
                .busy_timeout(busy_timeout);
            let pool = SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (opts, pool, ":memory:".to_string())
        }
    };

    let pool: SqlitePool = pool_opts
        .acquire_timeout(Duration::from_millis(settings.acquire_timeout_ms))
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to open SQLite store at {path}: {e}")))?;

    // warm-up so a broken file fails at startup, not on the first request
    sqlx::query("SELECT 1;")
        .execute(&pool)
        .await
        .map_err(|e| AppError::config(format!("warmup query failed: {e}")))?;

    info!(
        "pool=create engine=sqlite path={} max={} acquire_timeout_ms={} busy_timeout_ms={}",
        path,
        settings.pool_max,
        settings.acquire_timeout_ms,
        settings.busy_timeout_ms
    );

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Create the `sleepers` table if it does not exist yet.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create = schema.create_table_from_entity(sleepers::Entity);
    create.if_not_exists();
    db.execute(backend.build(&create)).await?;

    info!(table = "sleepers", "schema=ready");
    Ok(())
}

/// Open the store and make sure the schema exists.
pub async fn bootstrap_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    let db = connect_db(settings).await?;
    ensure_schema(&db)
        .await
        .map_err(|e| AppError::config(format!("failed to create schema: {e}")))?;
    Ok(db)
}

/// Lightweight liveness query used by the health probe.
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.query_one(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1 as health_check".to_string(),
    ))
    .await?;
    Ok(())
}
