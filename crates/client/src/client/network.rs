//! Network service accessor: routers and LBaaS v2 load balancers.

use crate::client::Session;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ListFilters, LoadBalancer, Router};

/// Network (Neutron) operations bound to a [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct NetworkService<'a> {
    pub(crate) session: &'a Session,
}

impl NetworkService<'_> {
    /// API root, ending in `/v2.0`.
    pub fn endpoint(&self) -> &str {
        &self.session.network_url
    }

    pub async fn list_routers(&self, filters: &ListFilters) -> Result<Vec<Router>> {
        let s = self.session;
        endpoints::list_routers(
            &s.http,
            &s.network_url,
            s.token(),
            &s.paged(filters),
            s.request_timeout,
        )
        .await
    }

    pub async fn list_load_balancers(&self, filters: &ListFilters) -> Result<Vec<LoadBalancer>> {
        let s = self.session;
        endpoints::list_load_balancers(
            &s.http,
            &s.network_url,
            s.token(),
            &s.paged(filters),
            s.request_timeout,
        )
        .await
    }
}
