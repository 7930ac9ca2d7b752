use std::error::Error;

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    init_tracing()?;

    let flags = server::config::load_feature_flags();
    if flags.telemetry {
        server::telemetry::init_telemetry()?;
    }
    server::health::record_start_time();

    let settings = server::config::ServerSettings::from_env();

    let pool = server::db::create_pool()?;
    server::db::run_migrations(&pool).await?;
    tracing::info!(database = %server::db::database_url(), "schema ready");

    let state = server::db::AppState::new(pool.clone())?;

    let mut router = server::openapi::app_router(state, flags, settings.max_upload_bytes);

    if flags.telemetry {
        router = router.layer(server::telemetry::RequestSpanLayer);
    }

    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    tracing::info!(addr = %settings.bind_addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
