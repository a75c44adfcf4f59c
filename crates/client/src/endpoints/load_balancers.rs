//! Load balancer listing (LBaaS v2 extension of the network API).

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::pagination::{first_page_url, list_all};
use crate::error::Result;
use crate::models::{ListFilters, LoadBalancer};

/// List LBaaS v2 load balancers, following pagination.
///
/// `base_url` is the network API root, ending in `/v2.0`.
pub async fn list_load_balancers(
    client: &Client,
    base_url: &str,
    token: &str,
    filters: &ListFilters,
    timeout: Duration,
) -> Result<Vec<LoadBalancer>> {
    debug!(?filters, "Listing load balancers");
    let url = first_page_url(base_url, "lbaas/loadbalancers", filters)?;
    list_all(client, token, url, "loadbalancers", timeout).await
}
