//! Exporter bootstrap errors.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that stop the exporter process.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("invalid telemetry path '{0}': must be a literal path starting with '/' other than '/'")]
    InvalidTelemetryPath(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),
}
