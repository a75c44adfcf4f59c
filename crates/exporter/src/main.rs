//! OpenStack exporter - Prometheus exporter for OpenStack resource statuses.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging and optional OpenTelemetry export.
//! - Serve scrapes until Ctrl+C or SIGTERM.
//!
//! Does NOT handle:
//! - Collection or rendering (see the `openstack_exporter` library).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Cloud credentials are never read here; each scrape reads them itself.

mod args;
mod exit_code;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use exit_code::{ExitCode, ExitCodeExt};
use openstack_client::TracingConfig;
use openstack_config::ConfigLoader;
use openstack_exporter::{Collector, CredentialSource};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    let mut tracing_config = TracingConfig::new().with_log_format(cli.log_format);
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::ConfigError.as_i32());
        }
    };

    let result = run(cli).await;
    tracing_guard.shutdown();

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.collector_settings();

    if let Err(e) = ConfigLoader::new().from_env().and_then(|loader| loader.build()) {
        warn!(error = %e, "OpenStack credentials are not usable yet; scrapes will report openstack_up 0");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        collectors = ?settings.kinds.iter().map(|k| k.subsystem()).collect::<Vec<_>>(),
        "Starting OpenStack exporter"
    );

    let collector = Collector::new(CredentialSource::Environment, settings);
    openstack_exporter::server::serve(
        cli.listen_address,
        &cli.telemetry_path,
        collector,
        shutdown_signal(),
    )
    .await
    .context("exporter stopped")?;

    info!("OpenStack exporter shut down");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
