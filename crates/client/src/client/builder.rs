//! Client builder for constructing [`OpenStackClient`] instances.
//!
//! This module is responsible for:
//! - Taking a resolved [`CloudConfig`] from the config crate
//! - Configuring the underlying HTTP client (redirects, TLS verification, user agent)
//! - Normalizing the per-request timeout and page size
//!
//! # What this module does NOT handle:
//! - Authentication (see `session.rs`)
//! - Environment parsing (see `openstack_config::ConfigLoader`)
//!
//! # Invariants
//! - A cloud configuration is required before calling `build()`
//! - The page size is either unset or within `1..=MAX_PAGE_SIZE`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use openstack_config::CloudConfig;
use openstack_config::constants::{
    DEFAULT_MAX_REDIRECTS, DEFAULT_REQUEST_TIMEOUT_SECS, MAX_PAGE_SIZE,
};

use crate::client::OpenStackClient;
use crate::error::{ClientError, Result};

const USER_AGENT: &str = concat!("openstack-exporter/", env!("CARGO_PKG_VERSION"));

/// Builder for creating a new [`OpenStackClient`].
pub struct OpenStackClientBuilder {
    config: Option<CloudConfig>,
    request_timeout: Duration,
    page_size: Option<usize>,
}

impl Default for OpenStackClientBuilder {
    fn default() -> Self {
        Self {
            config: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            page_size: None,
        }
    }
}

impl OpenStackClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given cloud configuration for authentication and endpoint lookup.
    pub fn from_config(mut self, config: &CloudConfig) -> Self {
        self.config = Some(config.clone());
        self
    }

    /// Set the deadline for each HTTP request.
    ///
    /// Default is 30 seconds.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Request pages of at most `size` records. `None` leaves paging to the service.
    pub fn page_size(mut self, size: Option<usize>) -> Self {
        self.page_size = size;
        self
    }

    fn normalize_page_size(size: Option<usize>) -> Option<usize> {
        size.filter(|n| *n > 0).map(|n| n.min(MAX_PAGE_SIZE))
    }

    /// Build the [`OpenStackClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if no configuration was provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<OpenStackClient> {
        let config = self
            .config
            .ok_or_else(|| ClientError::InvalidUrl("auth_url is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if config.skip_verify {
            if config.auth_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "OS_INSECURE has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(OpenStackClient {
            http,
            config,
            request_timeout: self.request_timeout,
            page_size: Self::normalize_page_size(self.page_size),
        })
    }
}
