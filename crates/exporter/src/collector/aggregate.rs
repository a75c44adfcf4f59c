//! Status aggregation.
//!
//! Invariants:
//! - The sum of all counts equals the number of records aggregated.
//! - The result does not depend on record order.
//! - An empty status is its own `""` key.

use std::collections::BTreeMap;

use openstack_client::StatusRecord;

/// Status string to resource count, for one kind in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot(BTreeMap<String, u64>);

impl StatusSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, status: &str) -> u64 {
        self.0.get(status).copied().unwrap_or(0)
    }

    /// Number of resources counted across all statuses.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct statuses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in status order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(status, count)| (status.as_str(), *count))
    }

    fn record(&mut self, status: &str) {
        *self.0.entry(status.to_string()).or_insert(0) += 1;
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for StatusSnapshot {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(s, n)| (s.into(), n)).collect())
    }
}

/// Count records by status.
pub fn aggregate<I>(records: I) -> StatusSnapshot
where
    I: IntoIterator,
    I::Item: StatusRecord,
{
    let mut snapshot = StatusSnapshot::new();
    for record in records {
        snapshot.record(record.status());
    }
    snapshot
}
