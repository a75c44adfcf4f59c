//! Compute server models.

use serde::Deserialize;

use super::common::StatusRecord;
use crate::serde_helpers::string_or_null;

/// A Nova server (`GET /servers/detail`).
#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub status: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
}

impl StatusRecord for Server {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        &self.status
    }
}
