//! Service dispatch binary.
//!
//! Loads a TOML config, registers the declared services into a frozen
//! registry, and serves them over HTTP until SIGINT/SIGTERM.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use service_dispatch::config::loader::load_config;
use service_dispatch::lifecycle::{build_registry, signals};
use service_dispatch::observability::metrics;
use service_dispatch::{DispatchConfig, Dispatcher, HttpServer, Router, Shutdown};

#[derive(Parser)]
#[command(name = "service-dispatch")]
#[command(about = "Serve registered service stubs over HTTP", long_about = None)]
struct Args {
    /// Path to the TOML config file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "service_dispatch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("service-dispatch v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = if args.config.exists() {
        load_config(&args.config)?
    } else {
        tracing::warn!(path = %args.config.display(), "Config file not found, using defaults");
        DispatchConfig::default()
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        services = config.services.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Build and freeze the registry before any traffic
    let registry = Arc::new(build_registry(&config)?);
    let router = Router::new(registry);
    let dispatcher = Arc::new(Dispatcher::new(
        router,
        Duration::from_secs(config.timeouts.request_secs),
    ));

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen(shutdown.clone()));

    let server = HttpServer::new(config, dispatcher);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
