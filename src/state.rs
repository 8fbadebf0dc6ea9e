//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Handed to every handler; the pool is the per-request session source.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState { pool }
    }
}
