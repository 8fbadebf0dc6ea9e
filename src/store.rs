//! Pool setup and table DDL. Tables mirror the record types in `models`.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const USER_TABLE: &str = "\"user\"";
pub const CHARACTER_TABLE: &str = "\"character\"";
pub const PLANET_TABLE: &str = "\"planet\"";
pub const FAVORITE_TABLE: &str = "\"favorites\"";

/// Bare names of the tables `ensure_tables` creates.
pub const TABLE_NAMES: &[&str] = &["user", "character", "planet", "favorites"];

/// Ordered so referenced tables exist before the favorites foreign key.
const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id INTEGER PRIMARY KEY,
        email TEXT NOT NULL UNIQUE CHECK (length(email) <= 120),
        password TEXT NOT NULL CHECK (length(password) <= 80),
        is_active BOOLEAN NOT NULL DEFAULT 1
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "character" (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        homeworld TEXT,
        url TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "planet" (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        population TEXT,
        climate TEXT,
        terrain TEXT,
        url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "favorites" (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES "user" (id) ON DELETE CASCADE,
        item_type TEXT NOT NULL CHECK (item_type IN ('character', 'planet')),
        item_id INTEGER NOT NULL,
        UNIQUE (user_id, item_type, item_id)
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS "favorites_user_id_idx" ON "favorites" (user_id)"#,
];

/// Open a pool for `database_url`, creating the database file if missing.
/// In-memory databases are per-connection, so they are pinned to one connection.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::InvalidVar {
            name: "DATABASE_URL",
            reason: e.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool_opts = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };
    let pool = pool_opts.connect_with(opts).await?;
    Ok(pool)
}

/// Create all tables and indexes if they do not exist. Safe to call on every startup.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!(tables = TABLE_NAMES.len(), "schema ensured");
    Ok(())
}

/// Tables from `TABLE_NAMES` that are not present in the database.
pub async fn missing_tables(pool: &SqlitePool) -> Result<Vec<&'static str>, AppError> {
    let present: Vec<(String,)> = sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table'")
        .fetch_all(pool)
        .await?;
    Ok(TABLE_NAMES
        .iter()
        .copied()
        .filter(|t| !present.iter().any(|(name,)| name == t))
        .collect())
}
