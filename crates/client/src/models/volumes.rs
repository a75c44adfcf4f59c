//! Block storage volume models.

use serde::Deserialize;

use super::common::StatusRecord;
use crate::serde_helpers::{opt_u64_from_string_or_number, string_or_null};

/// A Cinder volume (`GET /volumes/detail`).
#[derive(Debug, Deserialize, Clone)]
pub struct Volume {
    pub id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub status: String,
    /// Size in GiB.
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub size: Option<u64>,
    #[serde(default, rename = "os-vol-tenant-attr:tenant_id")]
    pub tenant_id: Option<String>,
}

impl StatusRecord for Volume {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        &self.status
    }
}
