//! OpenStack status exporter.
//!
//! On each scrape the exporter authenticates against Keystone, lists every
//! enabled resource kind, counts resources per status and renders the result
//! in the Prometheus text format.
//!
//! Modules:
//! - [`collector`]: one collection pass, with per-kind failure isolation.
//! - [`exposition`]: Prometheus rendering of a pass.
//! - [`server`]: the HTTP listener serving the landing page and metrics path.

pub mod collector;
pub mod error;
pub mod exposition;
pub mod server;

pub use collector::{
    AuthError, CollectionResult, Collector, CollectorSettings, CredentialSource, FetchError,
    KindOutcome, KindReport, ResourceKind, StatusSnapshot, aggregate,
};
pub use error::ExporterError;
