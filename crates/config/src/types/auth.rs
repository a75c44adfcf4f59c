//! Authentication types for the identity service.
//!
//! Responsibilities:
//! - Define the supported Keystone v3 credential methods.
//! - Define how a token is scoped (project, domain, or unscoped).
//!
//! Does NOT handle:
//! - Building the token request body (see client crate).
//! - Reading values from the environment (see `loader` module).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - A user is always identified either by ID or by name plus owning domain.

use secrecy::SecretString;

/// A domain identified by ID or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainRef {
    Id(String),
    Name(String),
}

/// A user identified by ID, or by name within a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    Id(String),
    Name { name: String, domain: DomainRef },
}

/// An application credential identified by ID, or by name for a given user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationCredentialRef {
    Id(String),
    Name { name: String, user: UserRef },
}

/// Credential method used to obtain a token.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// User and password.
    Password { user: UserRef, password: SecretString },
    /// Application credential and its secret.
    ApplicationCredential {
        credential: ApplicationCredentialRef,
        secret: SecretString,
    },
    /// An existing token, re-scoped on each request.
    Token { token: SecretString },
}

impl AuthMethod {
    /// Short name of the method, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Password { .. } => "password",
            Self::ApplicationCredential { .. } => "application_credential",
            Self::Token { .. } => "token",
        }
    }
}

/// Scope requested for the issued token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    /// Project identified by ID.
    ProjectId(String),
    /// Project identified by name within a domain.
    ProjectName { name: String, domain: DomainRef },
    /// Domain scope.
    Domain(DomainRef),
    /// No explicit scope. Application credentials always use this.
    #[default]
    Unscoped,
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub method: AuthMethod,
    pub scope: Scope,
}
