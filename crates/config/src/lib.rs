//! Configuration management for the OpenStack status exporter.
//!
//! This crate provides types and loaders for the cloud connection settings
//! (auth URL, credentials, scope, region) read from `OS_*` environment
//! variables and optional `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{
    ApplicationCredentialRef, AuthConfig, AuthMethod, CloudConfig, DomainRef, Interface, Scope,
    UserRef,
};
