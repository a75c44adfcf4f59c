//! Error types for the OpenStack client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during OpenStack client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed before any API call could be made.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from an OpenStack service.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Failed to decode {resource} (page {page}): {source}")]
    Decode {
        resource: &'static str,
        page: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Response was well-formed JSON but missing required data.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A single request exceeded the per-request timeout.
    #[error("{operation} exceeded the {timeout:?} request timeout")]
    OperationTimeout {
        operation: String,
        timeout: Duration,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No catalog endpoint matched the requested service.
    #[error("No {interface} endpoint for service '{service}' in region '{region}'")]
    EndpointNotFound {
        service: String,
        interface: String,
        region: String,
    },

    /// More than one catalog endpoint matched the requested service.
    #[error("Found {count} matching endpoints for service '{service}'; set OS_REGION_NAME or OS_INTERFACE to disambiguate")]
    AmbiguousEndpoint { service: String, count: usize },
}

impl ClientError {
    /// Check if this error indicates an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthFailed(_) => true,
            Self::ApiError { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }

    /// Check if this error is a timeout, at either the transport or operation level.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::OperationTimeout { .. } => true,
            Self::HttpError(e) => e.is_timeout(),
            _ => false,
        }
    }
}
