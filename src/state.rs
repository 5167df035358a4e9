//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Persistence handle injected into every handler through axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
