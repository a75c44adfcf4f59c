//! Paginated listing over OpenStack collection endpoints.
//!
//! Responsibilities:
//! - Issue the first listing request and follow `rel="next"` links.
//! - Decode each page as `{"<collection>": [...], "<collection>_links": [...]}`.
//!
//! Does NOT handle:
//! - Choosing filters (callers pass a ready [`ListFilters`]).
//! - Partial results. The first failing page fails the whole listing.
//!
//! Invariants:
//! - Pages are requested strictly in sequence; page N+1 is only requested
//!   after page N decoded successfully.
//! - The stream ends when a page carries no `next` link or has no records.
//! - A `next` link pointing at any page already read in this listing is an
//!   error, not a loop.

use std::collections::HashSet;
use std::time::Duration;

use futures::{Stream, TryStreamExt, stream};
use openstack_config::constants::AUTH_TOKEN_HEADER;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::endpoints::request::{map_transport_error, send_request};
use crate::error::{ClientError, Result};
use crate::models::{Link, ListFilters};

/// Build the URL of the first page: `{base_url}/{path}?{filters}`.
pub fn first_page_url(base_url: &str, path: &str, filters: &ListFilters) -> Result<Url> {
    let raw = format!("{}/{}", base_url.trim_end_matches('/'), path);
    let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
    let params = filters.query_pairs();
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url)
}

/// Decode one page into its records and the `next` link, if any.
fn decode_page<T: DeserializeOwned>(
    bytes: &[u8],
    collection: &'static str,
    page: usize,
) -> Result<(Vec<T>, Option<String>)> {
    let decode_err = |source| ClientError::Decode {
        resource: collection,
        page,
        source,
    };

    let mut value: Value = serde_json::from_slice(bytes).map_err(decode_err)?;
    let items = value
        .get_mut(collection)
        .map(Value::take)
        .ok_or_else(|| decode_err(serde_json::Error::missing_field(collection)))?;
    let items: Vec<T> = serde_json::from_value(items).map_err(decode_err)?;

    let links_key = format!("{collection}_links");
    let next = match value.get_mut(&links_key).map(Value::take) {
        None | Some(Value::Null) => None,
        Some(links) => serde_json::from_value::<Vec<Link>>(links)
            .map_err(decode_err)?
            .into_iter()
            .find(Link::is_next)
            .map(|link| link.href),
    };

    Ok((items, next))
}

/// Position of a listing: the next page to request and every page already read.
struct PageCursor {
    url: Url,
    page: usize,
    visited: HashSet<Url>,
}

/// Lazily stream the pages of a collection listing, starting at `first`.
///
/// The stream is finite and cannot be restarted; build a new one to list again.
pub fn pages<'a, T>(
    client: &'a Client,
    token: &'a str,
    first: Url,
    collection: &'static str,
    timeout: Duration,
) -> impl Stream<Item = Result<Vec<T>>> + Send + 'a
where
    T: DeserializeOwned + Send + 'a,
{
    let cursor = PageCursor {
        url: first,
        page: 1,
        visited: HashSet::new(),
    };
    stream::try_unfold(Some(cursor), move |state| async move {
        let Some(PageCursor {
            url,
            page,
            mut visited,
        }) = state
        else {
            return Ok(None);
        };

        debug!(collection, page, url = %url, "Fetching page");
        let operation = format!("list {collection} page {page}");
        let builder = client
            .get(url.clone())
            .header(AUTH_TOKEN_HEADER, token)
            .header(ACCEPT, "application/json");
        let response = send_request(builder, &operation, timeout).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(e, &operation, timeout))?;

        let (items, next) = decode_page::<T>(&bytes, collection, page)?;
        if items.is_empty() {
            debug!(collection, page, "Empty page, listing complete");
            return Ok(None);
        }

        let next_state = match next {
            None => None,
            Some(href) => {
                let next_url = url
                    .join(&href)
                    .map_err(|e| ClientError::InvalidUrl(format!("{href}: {e}")))?;
                visited.insert(url);
                if visited.contains(&next_url) {
                    return Err(ClientError::InvalidResponse(format!(
                        "{collection} page {page} links back to an already listed page: {next_url}"
                    )));
                }
                Some(PageCursor {
                    url: next_url,
                    page: page + 1,
                    visited,
                })
            }
        };

        Ok(Some((items, next_state)))
    })
}

/// Collect every page of a listing into one vector.
pub async fn list_all<T>(
    client: &Client,
    token: &str,
    first: Url,
    collection: &'static str,
    timeout: Duration,
) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send,
{
    let records: Vec<T> = pages(client, token, first, collection, timeout)
        .try_concat()
        .await?;
    debug!(collection, count = records.len(), "Listing complete");
    Ok(records)
}
