//! Serde helpers for loosely typed OpenStack JSON.
//!
//! Invariants / assumptions:
//! - Services may send `null` for string fields such as `name` or `status`;
//!   these decode to the empty string so callers never see `Option` noise.
//! - Some services return numeric fields as strings depending on version.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    String(String),
}

/// Deserialize a string, mapping `null` to `""`.
pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<U64OrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(U64OrString::U64(v)) => Ok(Some(v)),
        Some(U64OrString::String(s)) => s.parse::<u64>().map(Some).map_err(D::Error::custom),
    }
}
