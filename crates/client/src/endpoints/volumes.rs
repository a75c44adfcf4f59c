//! Block storage volume listing.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::pagination::{first_page_url, list_all};
use crate::error::Result;
use crate::models::{ListFilters, Volume};

/// List volumes with details, following pagination.
///
/// Listing across projects needs `all_tenants` in `filters` and an admin token.
///
/// `base_url` is the block storage project endpoint.
pub async fn list_volumes(
    client: &Client,
    base_url: &str,
    token: &str,
    filters: &ListFilters,
    timeout: Duration,
) -> Result<Vec<Volume>> {
    debug!(?filters, "Listing volumes");
    let url = first_page_url(base_url, "volumes/detail", filters)?;
    list_all(client, token, url, "volumes", timeout).await
}
