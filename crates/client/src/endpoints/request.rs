//! Request execution and error mapping.
//!
//! Responsibilities:
//! - Apply the per-request deadline and W3C trace context to outgoing requests.
//! - Convert non-success responses into [`ClientError::ApiError`], keeping the
//!   OpenStack request ID and the service's own error message.
//! - Convert transport timeouts into [`ClientError::OperationTimeout`].
//!
//! Does NOT handle:
//! - Retries. A failed request fails the operation that issued it.
//! - Response decoding (callers read the body themselves).

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::tracing::inject_trace_context;

/// Header carrying the request ID assigned by OpenStack services.
pub const REQUEST_ID_HEADER: &str = "X-Openstack-Request-Id";

/// Nova reports its request ID under its own header name.
const COMPUTE_REQUEST_ID_HEADER: &str = "X-Compute-Request-Id";

/// Map a transport error, turning timeouts into [`ClientError::OperationTimeout`].
pub(crate) fn map_transport_error(
    err: reqwest::Error,
    operation: &str,
    timeout: Duration,
) -> ClientError {
    if err.is_timeout() {
        ClientError::OperationTimeout {
            operation: operation.to_string(),
            timeout,
        }
    } else {
        ClientError::HttpError(err)
    }
}

/// Send a request bounded by `timeout` and fail on any non-2xx status.
pub async fn send_request(
    builder: RequestBuilder,
    operation: &str,
    timeout: Duration,
) -> Result<Response> {
    let builder = inject_trace_context(builder.timeout(timeout));
    let response = builder
        .send()
        .await
        .map_err(|e| map_transport_error(e, operation, timeout))?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url().to_string();
    let request_id = [REQUEST_ID_HEADER, COMPUTE_REQUEST_ID_HEADER]
        .iter()
        .find_map(|name| response.headers().get(*name))
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = error_message(&body).unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            trimmed.to_string()
        }
    });

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
        request_id,
    })
}

/// Extract the human-readable message from an OpenStack error body.
///
/// Services wrap the message differently: `{"NeutronError": {"message": ..}}`,
/// `{"itemNotFound": {"message": ..}}`, `{"error": {"message": ..}}` or a
/// top-level `faultstring`.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    if let Some(fault) = object.get("faultstring").and_then(Value::as_str) {
        return Some(fault.to_string());
    }
    if let Some(message) = object.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }

    object
        .values()
        .filter_map(Value::as_object)
        .find_map(|inner| inner.get("message").and_then(Value::as_str))
        .map(|s| s.to_string())
}
