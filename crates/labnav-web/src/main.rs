//! Lab Navigator Web Server
//! 
//! Run with: cargo run -p labnav-web -- --config labnav.toml

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use labnav_config::Config;
use labnav_web::{router::build_router, state::AppState};

#[derive(Debug, Parser)]
#[command(name = "labnav-web", version, about = "RNA Lab Navigator dashboard shell")]
struct Cli {
    /// Path to labnav.toml (falls back to LABNAV_CONFIG, then ./labnav.toml)
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    info!("Starting Lab Navigator web server...");

    let config = Config::load(cli.config.as_deref())?;
    let addr = config.server.bind_addr();
    info!(backend = %config.backend.base_url, "Retrieval backend");

    // Create app state
    let state = AppState::new(config)?;

    // Build router
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
