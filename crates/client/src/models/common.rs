//! Common types shared across OpenStack API models.

use serde::Deserialize;

/// A resource that reports a lifecycle status.
///
/// The status field name differs between services (`status` for routers,
/// volumes and servers, `provisioning_status` for load balancers); each model
/// maps its own field here.
pub trait StatusRecord {
    /// Resource identifier.
    fn id(&self) -> &str;

    /// Provider-reported status. Empty when the service sent none.
    fn status(&self) -> &str;
}

impl<T: StatusRecord + ?Sized> StatusRecord for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn status(&self) -> &str {
        (**self).status()
    }
}

/// A pagination link as returned in `<collection>_links`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub rel: String,
}

impl Link {
    pub fn is_next(&self) -> bool {
        self.rel == "next"
    }
}

/// Query filters applied to a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilters {
    /// List resources of every project (requires an admin role).
    pub all_tenants: bool,
    /// Page size requested from the service.
    pub limit: Option<usize>,
}

impl ListFilters {
    pub fn all_tenants() -> Self {
        Self {
            all_tenants: true,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Query parameters for the first page. Later pages follow `next` links verbatim.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.all_tenants {
            params.push(("all_tenants", "true".to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}
