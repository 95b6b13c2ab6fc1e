use anyhow::{Context, Result};
use api_server::{config::ServerConfig, create_app, AppState};
use clap::Parser;
use diag_log::{diag, Log};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to load .env file");
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    let log = Arc::new(Log::from_config(&config.log_config()));

    // Initialize application state
    let state = AppState::new(log.clone());

    // Create the application
    let app = create_app(state);

    // Start server
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server starting on http://{}", addr);
    diag!(log, ok, format!("[🚀] api running on port {}", config.port));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(log))
        .await
        .context("Server failed to start")?;

    Ok(())
}

async fn shutdown_signal(log: Arc<Log>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    diag!(log, warn, "shutting down");
}
