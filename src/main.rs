//! DevOps info service entry point.

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devops_info_service::api::{create_router, AppState};
use devops_info_service::config::Config;
use devops_info_service::metrics;
use devops_info_service::utils::shutdown_signal;

/// DevOps info service.
#[derive(Parser, Debug)]
#[command(name = "devops-info-service")]
#[command(about = "HTTP service exposing service, system, and runtime metadata")]
#[command(version)]
struct Args {
    /// Bind address (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging (overrides DEBUG).
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config =
        Config::load().map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;

    // Override with CLI args if provided
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.verbose {
        config.debug = true;
    }

    // Initialize logging; RUST_LOG wins over the DEBUG-derived default
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("configuration validation failed: {e}"));
    }

    // Initialize metrics
    metrics::init_metrics();

    // The start instant anchors every uptime computation
    let state = AppState::new();
    let router = create_router(state);

    // Bind and serve
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Starting DevOps Info Service on {}", addr);
    info!("Debug mode: {}", config.debug);

    // Connect-info exposes the peer address to the request echo
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
