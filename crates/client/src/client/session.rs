//! Authentication and per-pass sessions.
//!
//! [`OpenStackClient::authenticate`] issues one Keystone token and resolves
//! the compute, network and block storage endpoints from its catalog. The
//! resulting [`Session`] is meant to serve a single collection pass.
//!
//! # Invariants
//! - The token is held as a `SecretString` and never logged.
//! - Network URLs always point at the `/v2.0` API root.
//! - Block storage is located through `volumev3`, then `volumev2`, then
//!   `block-storage`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::catalog::resolve_endpoint;
use crate::client::{BlockStorageService, ComputeService, NetworkService, OpenStackClient};
use crate::endpoints;
use crate::error::Result;
use crate::models::ListFilters;

const COMPUTE_TYPES: &[&str] = &["compute"];
const NETWORK_TYPES: &[&str] = &["network"];
const BLOCK_STORAGE_TYPES: &[&str] = &["volumev3", "volumev2", "block-storage"];

const NETWORK_API_VERSION: &str = "v2.0";

/// An authenticated handle with resolved service endpoints.
#[derive(Debug)]
pub struct Session {
    pub(crate) http: reqwest::Client,
    token: SecretString,
    expires_at: Option<DateTime<Utc>>,
    pub(crate) compute_url: String,
    pub(crate) network_url: String,
    pub(crate) block_storage_url: String,
    pub(crate) request_timeout: Duration,
    pub(crate) page_size: Option<usize>,
}

impl Session {
    pub(crate) fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Apply the session's page size unless the caller chose a limit.
    pub(crate) fn paged(&self, filters: &ListFilters) -> ListFilters {
        filters.with_limit(filters.limit.or(self.page_size))
    }

    /// When Keystone says the token stops being valid, if it said.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn compute(&self) -> ComputeService<'_> {
        ComputeService { session: self }
    }

    pub fn network(&self) -> NetworkService<'_> {
        NetworkService { session: self }
    }

    pub fn block_storage(&self) -> BlockStorageService<'_> {
        BlockStorageService { session: self }
    }
}

/// Append the network API version unless the catalog URL already carries it.
fn network_api_root(url: &str) -> String {
    let url = url.trim_end_matches('/');
    if url.ends_with(NETWORK_API_VERSION) {
        url.to_string()
    } else {
        format!("{url}/{NETWORK_API_VERSION}")
    }
}

impl OpenStackClient {
    /// Issue a new token and resolve the service endpoints.
    ///
    /// # Errors
    ///
    /// Returns the token request's error (transport, `ApiError`, timeout),
    /// [`crate::ClientError::AuthFailed`] if Keystone sent no token, or
    /// `EndpointNotFound` / `AmbiguousEndpoint` if a service cannot be located.
    pub async fn authenticate(&self) -> Result<Session> {
        let issued = endpoints::issue_token(
            &self.http,
            &self.config.auth_url,
            &self.config.auth,
            self.request_timeout,
        )
        .await?;

        let catalog = &issued.body.catalog;
        let interface = self.config.interface;
        let region = self.config.region.as_deref();

        let compute_url = resolve_endpoint(catalog, COMPUTE_TYPES, interface, region)?;
        let network_url = network_api_root(&resolve_endpoint(
            catalog,
            NETWORK_TYPES,
            interface,
            region,
        )?);
        let block_storage_url = resolve_endpoint(catalog, BLOCK_STORAGE_TYPES, interface, region)?;

        debug!(
            compute = %compute_url,
            network = %network_url,
            block_storage = %block_storage_url,
            "Resolved service endpoints"
        );

        Ok(Session {
            http: self.http.clone(),
            token: issued.token,
            expires_at: issued.body.expires_at,
            compute_url,
            network_url,
            block_storage_url,
            request_timeout: self.request_timeout,
            page_size: self.page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_api_root() {
        assert_eq!(network_api_root("http://neutron:9696"), "http://neutron:9696/v2.0");
        assert_eq!(network_api_root("http://neutron:9696/"), "http://neutron:9696/v2.0");
        assert_eq!(
            network_api_root("http://neutron:9696/v2.0/"),
            "http://neutron:9696/v2.0"
        );
    }
}
