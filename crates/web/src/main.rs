// Slidebox server
// Decision: Credentials in SQLite unless DEV_MODE is set; uploads always on disk
// Decision: Drain in-flight requests on SIGINT/SIGTERM before exiting

use anyhow::{Context, Result};
use slidebox_core::telemetry::{init_telemetry, TelemetryConfig};
use slidebox_web::{
    build_router, config::AppConfig, storage::LocalFileRepository, storage::StorageBackend,
    AppState,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let mut telemetry_config = TelemetryConfig::from_env();
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());
    init_telemetry(telemetry_config);

    tracing::info!("slidebox starting...");

    let config = AppConfig::from_env();

    let db = if config.dev_mode {
        tracing::warn!("DEV_MODE enabled, credentials are kept in memory and lost on restart");
        StorageBackend::in_memory()
    } else {
        let db = StorageBackend::sqlite(&config.database_url)
            .await
            .context("Failed to connect to database")?;
        tracing::info!(url = %config.database_url, "Connected to database");
        db
    };

    let files = LocalFileRepository::open(config.upload_dir.clone())
        .await
        .context("Failed to open upload directory")?;
    tracing::info!(dir = %config.upload_dir.display(), "Serving uploads");

    let addr = config.http_addr.clone();
    let state = AppState::new(config, db, Arc::new(files));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("slidebox listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("slidebox stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (mut sigterm, mut sigint) = match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(term), Ok(int)) => (term, int),
            _ => {
                tracing::warn!("Signal handlers unavailable, falling back to Ctrl-C");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Shutdown signal received");
}
