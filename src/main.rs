//! Jira relay server entry point.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use jira_relay::config::{load_config, validate_config, ConfigError, RelayConfig};
use jira_relay::http::HttpServer;
use jira_relay::lifecycle::{shutdown_signal, Shutdown};
use jira_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "jira-relay")]
#[command(about = "Relay browser requests to the Jira Cloud REST API", long_about = None)]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "JIRA_RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Listen port, overriding the config file.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

fn resolve_config(args: &Args) -> Result<RelayConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(port) = args.port {
        config.listener.port = port;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address(),
        upstream_scheme = %config.upstream.scheme,
        request_timeout_secs = ?config.upstream.request_timeout_secs,
        "jira-relay starting"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");
    tracing::info!("Health check: http://{}/health", local_addr);

    let shutdown = Shutdown::new();
    shutdown.trigger_on(shutdown_signal());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
