//! Data models for OpenStack API responses.
//!
//! Submodules:
//! - `common`: pagination links, list filters and the [`StatusRecord`] trait.
//! - `catalog`: Keystone token and service catalog.
//! - `routers`, `load_balancers`, `volumes`, `servers`: listed resources.

pub mod catalog;
pub mod common;
pub mod load_balancers;
pub mod routers;
pub mod servers;
pub mod volumes;

pub use catalog::{CatalogEndpoint, CatalogEntry, TokenBody, TokenResponse};
pub use common::{Link, ListFilters, StatusRecord};
pub use load_balancers::LoadBalancer;
pub use routers::Router;
pub use servers::Server;
pub use volumes::Volume;
