//! Simulated-workload metrics demo service.
//!
//! Binary entrypoint: parse CLI arguments, load configuration, initialize
//! logging and the Prometheus recorder, bind the listener, and serve until
//! a shutdown signal arrives.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use metrics_demo::config::{self, ServiceConfig};
use metrics_demo::http::HttpServer;
use metrics_demo::lifecycle::{signals, Shutdown};
use metrics_demo::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "metrics-demo")]
#[command(about = "HTTP service simulating latency and failure to demo metrics", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        metrics_enabled = config.observability.metrics_enabled,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let metrics_handle = if config.observability.metrics_enabled {
        Some(metrics::init_metrics_recorder()?)
    } else {
        tracing::warn!("Metrics exporter disabled; /metrics will return 404");
        None
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    let server = HttpServer::new(config, metrics_handle);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
