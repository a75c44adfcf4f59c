//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load cloud settings from `.env` files and `OS_*` environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layering explicit overrides.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
