//! Application state shared across Axum route handlers.
//!
//! The pool is constructed once in `main` (or a test harness) and injected
//! via Axum's `State` extractor, so handlers never reach for globals and
//! tests can hand every router its own database.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &SqlitePool {
        &self.db
    }
}
