use axum::extract::FromRef;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::pages::Pages;

/// Database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://court_cases.db";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Pool<Sqlite>>` or
/// `State<Arc<Pages>>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Sqlite>,
    pub pages: Arc<Pages>,
}

impl AppState {
    /// Build state around an existing pool, compiling the HTML templates.
    pub fn new(pool: Pool<Sqlite>) -> Result<Self, tera::Error> {
        Ok(Self {
            pool,
            pages: Arc::new(Pages::new()?),
        })
    }
}

/// Resolve the database URL from the environment (`.env` honoured).
pub fn database_url() -> String {
    // Load .env file if present (ignored in production where env vars are set directly).
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Create the connection pool from environment variables.
/// No connection is opened until the first query.
pub fn create_pool() -> Result<Pool<Sqlite>, sqlx::Error> {
    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    connect_lazy(&database_url(), max_connections)
}

/// Create a lazy pool for `url`. The database file is created on first
/// connect when missing.
pub fn connect_lazy(url: &str, max_connections: u32) -> Result<Pool<Sqlite>, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        // Concurrent writers wait on the file lock instead of failing with SQLITE_BUSY.
        .busy_timeout(Duration::from_secs(5));

    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options))
}

/// Create the schema if it does not exist yet. Safe to run on every startup.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
