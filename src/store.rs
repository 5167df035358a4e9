//! Connection setup and table DDL for campers, activities, and signups.

use crate::config::ServerConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const CAMPERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS campers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL CHECK (age BETWEEN 8 AND 18)
    )
"#;

const ACTIVITIES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS activities (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        difficulty INTEGER NOT NULL DEFAULT 1
    )
"#;

const SIGNUPS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS signups (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        time INTEGER NOT NULL CHECK (time BETWEEN 0 AND 23),
        camper_id INTEGER NOT NULL REFERENCES campers (id) ON DELETE CASCADE,
        activity_id INTEGER NOT NULL REFERENCES activities (id) ON DELETE CASCADE
    )
"#;

const SIGNUP_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_signups_camper_id ON signups (camper_id)",
    "CREATE INDEX IF NOT EXISTS idx_signups_activity_id ON signups (activity_id)",
];

/// Open a pool for `config.database_url`, creating the database file if missing.
/// Foreign key enforcement is switched on for every connection.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| ConfigError::DatabaseUrl(format!("{}: {}", config.database_url, e)))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(url = %config.database_url, "connected to database");
    Ok(pool)
}

/// In-memory pool holding a single connection that never expires, so the database
/// survives for the lifetime of the pool.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the three tables and their indexes if they do not exist. Idempotent.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in [CAMPERS_DDL, ACTIVITIES_DDL, SIGNUPS_DDL] {
        sqlx::query(ddl).execute(pool).await?;
    }
    for ddl in SIGNUP_INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("tables ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        assert_eq!(table_names(&pool).await, vec!["activities", "campers", "signups"]);
    }

    #[tokio::test]
    async fn store_rejects_dangling_signup() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        let res = sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (9, 1, 1)")
            .execute(&pool)
            .await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn store_rejects_out_of_range_age() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        let res = sqlx::query("INSERT INTO campers (name, age) VALUES ('Kim', 19)")
            .execute(&pool)
            .await;
        assert!(res.is_err());
    }
}
