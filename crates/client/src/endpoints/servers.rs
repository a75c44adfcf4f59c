//! Compute server listing.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::pagination::{first_page_url, list_all};
use crate::error::Result;
use crate::models::{ListFilters, Server};

/// List servers with details, following pagination.
///
/// `base_url` is the compute endpoint.
pub async fn list_servers(
    client: &Client,
    base_url: &str,
    token: &str,
    filters: &ListFilters,
    timeout: Duration,
) -> Result<Vec<Server>> {
    debug!(?filters, "Listing servers");
    let url = first_page_url(base_url, "servers/detail", filters)?;
    list_all(client, token, url, "servers", timeout).await
}
