//! OpenStack client and authenticated sessions.
//!
//! This module provides [`OpenStackClient`], which holds the resolved cloud
//! configuration and a shared HTTP client, and [`Session`], the authenticated
//! handle produced by [`OpenStackClient::authenticate`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Token issue and endpoint resolution
//! - `network`, `block_storage`, `compute`: per-service accessors on a session
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Reading configuration from the environment (see `openstack-config`)
//!
//! # Invariants
//! - A client never caches tokens; every `authenticate` call issues a new one.
//! - A [`Session`] always carries all three service endpoints or does not exist.

pub mod builder;
mod block_storage;
mod compute;
mod network;
mod session;

use std::time::Duration;

use openstack_config::{CloudConfig, Interface};

pub use block_storage::BlockStorageService;
pub use compute::ComputeService;
pub use network::NetworkService;
pub use session::Session;

/// OpenStack API client.
///
/// Cheap to keep around for the lifetime of the process: it owns a pooled
/// `reqwest::Client` and the configuration used to authenticate.
///
/// ```rust,ignore
/// use openstack_client::OpenStackClient;
/// use openstack_config::ConfigLoader;
///
/// let config = ConfigLoader::new().from_env()?.build()?;
/// let client = OpenStackClient::builder().from_config(&config).build()?;
/// let session = client.authenticate().await?;
/// let routers = session.network().list_routers(&Default::default()).await?;
/// ```
#[derive(Debug)]
pub struct OpenStackClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: CloudConfig,
    pub(crate) request_timeout: Duration,
    pub(crate) page_size: Option<usize>,
}

impl OpenStackClient {
    /// Create a new client builder.
    pub fn builder() -> builder::OpenStackClientBuilder {
        builder::OpenStackClientBuilder::new()
    }

    /// Normalized identity endpoint, ending in `/v3`.
    pub fn auth_url(&self) -> &str {
        &self.config.auth_url
    }

    pub fn region(&self) -> Option<&str> {
        self.config.region.as_deref()
    }

    pub fn interface(&self) -> Interface {
        self.config.interface
    }

    /// Deadline applied to each individual HTTP request.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
