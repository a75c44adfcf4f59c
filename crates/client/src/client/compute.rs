//! Compute service accessor.

use crate::client::Session;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ListFilters, Server};

/// Compute (Nova) operations bound to a [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct ComputeService<'a> {
    pub(crate) session: &'a Session,
}

impl ComputeService<'_> {
    pub fn endpoint(&self) -> &str {
        &self.session.compute_url
    }

    pub async fn list_servers(&self, filters: &ListFilters) -> Result<Vec<Server>> {
        let s = self.session;
        endpoints::list_servers(
            &s.http,
            &s.compute_url,
            s.token(),
            &s.paged(filters),
            s.request_timeout,
        )
        .await
    }
}
