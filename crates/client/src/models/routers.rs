//! Network router models.

use serde::Deserialize;

use super::common::StatusRecord;
use crate::serde_helpers::string_or_null;

/// A Neutron router (`GET /v2.0/routers`).
#[derive(Debug, Deserialize, Clone)]
pub struct Router {
    pub id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub status: String,
    #[serde(default)]
    pub admin_state_up: Option<bool>,
    #[serde(default)]
    pub project_id: Option<String>,
}

impl StatusRecord for Router {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        &self.status
    }
}
