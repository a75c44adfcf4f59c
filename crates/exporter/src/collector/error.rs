//! Collection pass errors.
//!
//! [`AuthError`] aborts a whole pass; [`FetchError`] is scoped to one
//! resource kind. Neither ever reaches the scrape caller.

use std::time::Duration;

use openstack_client::ClientError;
use openstack_config::ConfigError;
use thiserror::Error;

use super::kind::ResourceKind;

/// Failure to obtain a session. Fatal to the pass.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid cloud configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("authentication failed: {0}")]
    Client(#[from] ClientError),

    #[error("scrape deadline of {0:?} expired during authentication")]
    Deadline(Duration),
}

/// Failure to list one resource kind.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to list {kind} resources: {source}")]
    Client {
        kind: ResourceKind,
        #[source]
        source: ClientError,
    },

    /// The pass deadline expired mid-listing. Per-request timeouts surface
    /// as [`ClientError::OperationTimeout`] inside [`FetchError::Client`].
    #[error(
        "scrape deadline of {timeout:?} expired while listing {kind} resources ({elapsed:?} into the listing)"
    )]
    Deadline {
        kind: ResourceKind,
        timeout: Duration,
        elapsed: Duration,
    },
}

impl FetchError {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Client { kind, .. } | Self::Deadline { kind, .. } => *kind,
        }
    }
}
