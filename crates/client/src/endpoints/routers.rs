//! Network router listing.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::pagination::{first_page_url, list_all};
use crate::error::Result;
use crate::models::{ListFilters, Router};

/// List routers, following pagination.
///
/// `base_url` is the network API root, ending in `/v2.0`.
pub async fn list_routers(
    client: &Client,
    base_url: &str,
    token: &str,
    filters: &ListFilters,
    timeout: Duration,
) -> Result<Vec<Router>> {
    debug!(?filters, "Listing routers");
    let url = first_page_url(base_url, "routers", filters)?;
    list_all(client, token, url, "routers", timeout).await
}
