//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, hints).
//! - Errors never include secret values.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Identity endpoint is required. Set OS_AUTH_URL.")]
    MissingAuthUrl,

    #[error("Invalid identity endpoint '{url}': {message}")]
    InvalidAuthUrl { url: String, message: String },

    #[error(
        "Authentication configuration is required (OS_TOKEN, OS_APPLICATION_CREDENTIAL_SECRET, or OS_USERNAME/OS_USER_ID with OS_PASSWORD)"
    )]
    MissingAuth,

    #[error("{what} requires {hint}")]
    IncompleteAuth {
        what: &'static str,
        hint: &'static str,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Whether the error means credentials are absent rather than malformed.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(
            self,
            Self::MissingAuthUrl | Self::MissingAuth | Self::MissingEnvVar(_)
        )
    }
}
