//! Configuration types.
//!
//! Submodules:
//! - `auth`: credential methods and token scope.
//! - `cloud`: the resolved connection configuration.

mod auth;
mod cloud;

pub use auth::{ApplicationCredentialRef, AuthConfig, AuthMethod, DomainRef, Scope, UserRef};
pub use cloud::{CloudConfig, Interface};
