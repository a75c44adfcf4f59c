//! The outcome of one collection pass.

use std::time::Duration;

use super::aggregate::StatusSnapshot;
use super::kind::ResourceKind;

/// What happened to one enabled kind during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindOutcome {
    /// Every page was listed and aggregated.
    Collected,
    /// Listing failed or ran past the deadline.
    Failed,
    /// Not attempted because authentication failed.
    Skipped,
}

/// Per-kind slot of a [`CollectionResult`].
#[derive(Debug, Clone)]
pub struct KindReport {
    pub kind: ResourceKind,
    pub outcome: KindOutcome,
    /// Empty unless `outcome` is `Collected`.
    pub snapshot: StatusSnapshot,
    /// Time spent listing this kind. Zero when skipped.
    pub duration: Duration,
}

impl KindReport {
    pub fn collected(kind: ResourceKind, snapshot: StatusSnapshot, duration: Duration) -> Self {
        Self {
            kind,
            outcome: KindOutcome::Collected,
            snapshot,
            duration,
        }
    }

    pub fn failed(kind: ResourceKind, duration: Duration) -> Self {
        Self {
            kind,
            outcome: KindOutcome::Failed,
            snapshot: StatusSnapshot::new(),
            duration,
        }
    }

    pub fn skipped(kind: ResourceKind) -> Self {
        Self {
            kind,
            outcome: KindOutcome::Skipped,
            snapshot: StatusSnapshot::new(),
            duration: Duration::ZERO,
        }
    }

    /// Whether a fetch was attempted for this kind.
    pub fn attempted(&self) -> bool {
        self.outcome != KindOutcome::Skipped
    }
}

/// Per-kind reports plus the global health flag.
#[derive(Debug, Clone)]
pub struct CollectionResult {
    /// True only when authentication and every enabled kind succeeded.
    pub operational: bool,
    /// One report per enabled kind, in configuration order.
    pub reports: Vec<KindReport>,
    pub duration: Duration,
}

impl CollectionResult {
    /// Result of a pass whose authentication failed.
    pub fn auth_failed(kinds: &[ResourceKind], duration: Duration) -> Self {
        Self {
            operational: false,
            reports: kinds.iter().copied().map(KindReport::skipped).collect(),
            duration,
        }
    }

    /// Result assembled from the reports of every attempted kind.
    pub fn from_reports(reports: Vec<KindReport>, duration: Duration) -> Self {
        let operational = reports
            .iter()
            .all(|r| r.outcome == KindOutcome::Collected);
        Self {
            operational,
            reports,
            duration,
        }
    }

    pub fn report(&self, kind: ResourceKind) -> Option<&KindReport> {
        self.reports.iter().find(|r| r.kind == kind)
    }

    /// Snapshot for `kind`; empty when the kind is disabled or failed.
    pub fn snapshot(&self, kind: ResourceKind) -> StatusSnapshot {
        self.report(kind)
            .map(|r| r.snapshot.clone())
            .unwrap_or_default()
    }
}
