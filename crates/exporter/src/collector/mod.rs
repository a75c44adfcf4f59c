//! Collection orchestration.
//!
//! Responsibilities:
//! - Authenticate once per pass, reading credentials at call time.
//! - List and aggregate every enabled resource kind concurrently.
//! - Isolate failures so one kind's error leaves the others intact.
//!
//! Does NOT handle:
//! - Rendering metrics (see `exposition`).
//! - Scheduling. A pass runs only when a scrape asks for one.
//!
//! Invariants:
//! - Nothing is shared between passes: each pass gets its own token and
//!   fresh snapshots.
//! - Authentication failure skips every fetch and leaves all snapshots empty.
//! - A failed kind's snapshot is empty, never partial.
//! - The whole pass, authentication included, ends by the scrape deadline.

mod aggregate;
mod error;
mod kind;
mod result;

use std::time::{Duration, Instant};

use futures::future::join_all;
use openstack_client::{ClientError, OpenStackClient, Session};
use openstack_config::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SCRAPE_TIMEOUT_SECS};
use openstack_config::{CloudConfig, ConfigLoader};
use tokio::time::timeout_at;
use tracing::{debug, error, info, warn};

pub use aggregate::{StatusSnapshot, aggregate};
pub use error::{AuthError, FetchError};
pub use kind::ResourceKind;
pub use result::{CollectionResult, KindOutcome, KindReport};

/// Where a pass gets its cloud configuration from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Read `OS_*` variables on every pass.
    Environment,
    /// Use a fixed configuration.
    Fixed(CloudConfig),
}

impl CredentialSource {
    fn load(&self) -> Result<CloudConfig, AuthError> {
        match self {
            Self::Environment => Ok(ConfigLoader::new().from_env()?.build()?),
            Self::Fixed(config) => Ok(config.clone()),
        }
    }
}

/// Tunables of a collection pass.
#[derive(Debug, Clone)]
pub struct CollectorSettings {
    /// Kinds to collect, in reporting order. Duplicates are ignored.
    pub kinds: Vec<ResourceKind>,
    /// Deadline for each HTTP request.
    pub request_timeout: Duration,
    /// Deadline for the whole pass.
    pub scrape_timeout: Duration,
    pub page_size: Option<usize>,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            kinds: ResourceKind::DEFAULT_ENABLED.to_vec(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            scrape_timeout: Duration::from_secs(DEFAULT_SCRAPE_TIMEOUT_SECS),
            page_size: None,
        }
    }
}

impl CollectorSettings {
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = ResourceKind>) -> Self {
        let mut unique = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        self.kinds = unique;
        self
    }
}

/// Runs collection passes.
#[derive(Debug, Clone)]
pub struct Collector {
    source: CredentialSource,
    settings: CollectorSettings,
}

impl Collector {
    pub fn new(source: CredentialSource, mut settings: CollectorSettings) -> Self {
        let kinds = std::mem::take(&mut settings.kinds);
        Self {
            source,
            settings: settings.with_kinds(kinds),
        }
    }

    pub fn settings(&self) -> &CollectorSettings {
        &self.settings
    }

    /// Run one pass: authenticate, then list and aggregate each enabled kind.
    ///
    /// Never fails; errors are logged and reflected in the result.
    pub async fn collect(&self) -> CollectionResult {
        let started = Instant::now();
        let deadline = tokio::time::Instant::now() + self.settings.scrape_timeout;

        let session = match timeout_at(deadline, self.authenticate()).await {
            Ok(Ok(session)) => session,
            Ok(Err(e)) => return self.abort(e, started),
            Err(_) => return self.abort(AuthError::Deadline(self.settings.scrape_timeout), started),
        };

        let fetches = self.settings.kinds.iter().map(|&kind| {
            let session = &session;
            async move {
                let kind_started = Instant::now();
                let outcome = match timeout_at(deadline, fetch_kind(session, kind)).await {
                    Ok(Ok(snapshot)) => Ok(snapshot),
                    Ok(Err(source)) => Err(FetchError::Client { kind, source }),
                    Err(_) => Err(FetchError::Deadline {
                        kind,
                        timeout: self.settings.scrape_timeout,
                        elapsed: kind_started.elapsed(),
                    }),
                };
                let elapsed = kind_started.elapsed();
                match outcome {
                    Ok(snapshot) => {
                        debug!(
                            collector = kind.subsystem(),
                            resources = snapshot.total(),
                            statuses = snapshot.len(),
                            elapsed_ms = elapsed.as_millis() as u64,
                            "Collected"
                        );
                        KindReport::collected(kind, snapshot, elapsed)
                    }
                    Err(e) => {
                        warn!(collector = e.kind().subsystem(), error = %e, "Collector failed");
                        KindReport::failed(kind, elapsed)
                    }
                }
            }
        });

        let reports = join_all(fetches).await;
        let result = CollectionResult::from_reports(reports, started.elapsed());
        info!(
            operational = result.operational,
            elapsed_ms = result.duration.as_millis() as u64,
            "Collection pass complete"
        );
        result
    }

    async fn authenticate(&self) -> Result<Session, AuthError> {
        let config = self.source.load()?;
        let client = OpenStackClient::builder()
            .from_config(&config)
            .request_timeout(self.settings.request_timeout)
            .page_size(self.settings.page_size)
            .build()?;
        Ok(client.authenticate().await?)
    }

    fn abort(&self, err: AuthError, started: Instant) -> CollectionResult {
        error!(error = %err, "Authentication failed, skipping all collectors");
        CollectionResult::auth_failed(&self.settings.kinds, started.elapsed())
    }
}

/// List every page of `kind` and count statuses.
async fn fetch_kind(session: &Session, kind: ResourceKind) -> Result<StatusSnapshot, ClientError> {
    let filters = kind.filters();
    let snapshot = match kind {
        ResourceKind::Router => aggregate(&session.network().list_routers(&filters).await?),
        ResourceKind::LoadBalancer => {
            aggregate(&session.network().list_load_balancers(&filters).await?)
        }
        ResourceKind::Volume => aggregate(&session.block_storage().list_volumes(&filters).await?),
        ResourceKind::Server => aggregate(&session.compute().list_servers(&filters).await?),
    };
    Ok(snapshot)
}
