//! Load balancer models.

use serde::Deserialize;

use super::common::StatusRecord;
use crate::serde_helpers::string_or_null;

/// An LBaaS v2 load balancer (`GET /v2.0/lbaas/loadbalancers`).
///
/// Load balancers report two statuses; the provisioning status is the one
/// tracked as the resource's status.
#[derive(Debug, Deserialize, Clone)]
pub struct LoadBalancer {
    pub id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub provisioning_status: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub operating_status: String,
    #[serde(default)]
    pub vip_address: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

impl StatusRecord for LoadBalancer {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        &self.provisioning_status
    }
}
