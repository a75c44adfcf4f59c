//! Keystone v3 token response and service catalog models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body of `POST /v3/auth/tokens`. The token itself arrives in a header.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenResponse {
    pub token: TokenBody,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenBody {
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub methods: Vec<String>,
    /// Absent for unscoped tokens.
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

/// One service in the catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub endpoints: Vec<CatalogEndpoint>,
}

/// One endpoint of a catalog service.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogEndpoint {
    pub interface: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub region_id: Option<String>,
    pub url: String,
}

impl CatalogEndpoint {
    /// Whether this endpoint belongs to `region`. `None` matches every region.
    pub fn in_region(&self, region: Option<&str>) -> bool {
        match region {
            None => true,
            Some(wanted) => {
                self.region_id.as_deref() == Some(wanted) || self.region.as_deref() == Some(wanted)
            }
        }
    }
}
