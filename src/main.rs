//! Gate server binary.
//!
//! Loads configuration, initializes observability, and serves the access
//! gate in front of the fronted application's routes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;

use route_gate::config::{load_config, GateConfig};
use route_gate::http::GateServer;
use route_gate::observability::{logging, metrics};

#[derive(Debug, Parser)]
#[command(name = "route-gate", about = "Route classification and access gate server")]
struct Args {
    /// Path to the TOML configuration file. Defaults are used when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => GateConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        fail_mode = ?config.policy.fail_mode,
        session_cookie = %config.policy.session_cookie,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = match TcpListener::bind(&config.listener.bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(
                bind_address = %config.listener.bind_address,
                error = %err,
                "Failed to bind listener"
            );
            return ExitCode::FAILURE;
        }
    };

    let server = match GateServer::new(config) {
        Ok(server) => server,
        Err(err) => {
            tracing::error!(error = %err, "Failed to build gate");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = server.run(listener).await {
        tracing::error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
