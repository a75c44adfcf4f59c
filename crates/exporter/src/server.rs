//! HTTP listener for the scrape endpoint.
//!
//! Responsibilities:
//! - Serve a landing page at `/` linking to the metrics path.
//! - Run one collection pass per request to the metrics path and render it.
//!
//! Does NOT handle:
//! - Collection logic (see `collector`).
//!
//! Invariants:
//! - The metrics path answers 200 even when collection fails; failures show
//!   up as `openstack_up 0`.
//! - Concurrent scrapes each run their own pass.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

use crate::collector::Collector;
use crate::error::ExporterError;
use crate::exposition::{self, CONTENT_TYPE};

#[derive(Debug)]
struct AppState {
    collector: Collector,
    telemetry_path: String,
}

/// Check that `path` can be mounted next to the landing page.
///
/// The path must be a literal: route captures and wildcards (`:`, `*`,
/// `{`, `}`) and empty segments are rejected, as are query or fragment
/// markers and non-printable characters.
pub fn validate_telemetry_path(path: &str) -> Result<(), ExporterError> {
    let literal = path
        .chars()
        .all(|c| c.is_ascii_graphic() && !matches!(c, ':' | '*' | '{' | '}' | '?' | '#'));
    if !path.starts_with('/') || path == "/" || path.contains("//") || !literal {
        return Err(ExporterError::InvalidTelemetryPath(path.to_string()));
    }
    Ok(())
}

/// Build the router serving `/` and `telemetry_path`.
pub fn router(collector: Collector, telemetry_path: &str) -> Result<Router, ExporterError> {
    validate_telemetry_path(telemetry_path)?;
    let state = Arc::new(AppState {
        collector,
        telemetry_path: telemetry_path.to_string(),
    });

    Ok(Router::new()
        .route("/", get(landing))
        .route(telemetry_path, get(scrape))
        .with_state(state))
}

async fn landing(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(format!(
        "<html>\n<head><title>OpenStack Exporter</title></head>\n<body>\n\
         <h1>OpenStack Exporter</h1>\n\
         <p><a href=\"{path}\">Metrics</a></p>\n\
         </body>\n</html>\n",
        path = state.telemetry_path
    ))
}

async fn scrape(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.collector.collect().await;
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], exposition::render(&result))
}

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(
    addr: SocketAddr,
    telemetry_path: &str,
    collector: Collector,
    shutdown: F,
) -> Result<(), ExporterError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(collector, telemetry_path)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ExporterError::Bind { addr, source })?;

    info!(address = %addr, path = telemetry_path, "Listening for scrapes");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ExporterError::Serve)
}
