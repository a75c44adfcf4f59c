//! OpenStack REST API client.
//!
//! This crate provides a small, type-safe client for the pieces of the
//! OpenStack APIs the status exporter needs: Keystone v3 token issue and
//! catalog resolution, and paginated listings of routers, load balancers,
//! volumes and servers.

mod auth;
mod catalog;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod tracing;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::builder::OpenStackClientBuilder;
pub use client::{BlockStorageService, ComputeService, NetworkService, OpenStackClient, Session};
pub use error::{ClientError, Result};
pub use models::{ListFilters, LoadBalancer, Router, Server, StatusRecord, Volume};
pub use tracing::{LogFormat, TracingConfig, TracingError, TracingGuard};
