use crate::config::Config;
use crate::db::schema::SQLITE_INIT;
use crate::error::ApiError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Open the process-wide pool. Every pooled connection enforces foreign keys.
pub async fn connect(cfg: &Config) -> Result<SqlitePool, ApiError> {
    let connect_opts = SqliteConnectOptions::from_str(&cfg.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(connect_opts)
        .await?;
    info!(database_url = %cfg.database_url, "database pool ready");
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), ApiError> {
    // sqlx::query runs a single statement at a time
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
