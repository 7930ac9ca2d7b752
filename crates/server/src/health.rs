use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Sqlite};
use std::sync::OnceLock;
use std::time::Instant;

static STARTED_AT: OnceLock<Instant> = OnceLock::new();

/// Mark the process start. Only the first call counts.
pub fn record_start_time() {
    STARTED_AT.get_or_init(Instant::now);
}

fn uptime_seconds() -> u64 {
    STARTED_AT.get().map_or(0, |t| t.elapsed().as_secs())
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the process answers.
    pub status: String,
    /// `connected`, or `error: <detail>` when the probe query fails.
    pub db: String,
    pub uptime_seconds: u64,
    pub version: String,
}

async fn probe_database(pool: &Pool<Sqlite>) -> String {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "database probe failed");
            format!("error: {e}")
        }
    }
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Process is up; see `db` for storage", body = HealthResponse)),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Sqlite>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        db: probe_database(&pool).await,
        uptime_seconds: uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
