//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Decide which credential method and scope the collected values describe.
//! - Build and validate the final `CloudConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Credential precedence: token, then application credential, then password.
//! - Application credentials are already scoped, so no explicit scope is requested.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use url::Url;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::IDENTITY_API_VERSION;
use crate::types::{
    ApplicationCredentialRef, AuthConfig, AuthMethod, CloudConfig, DomainRef, Interface, Scope,
    UserRef,
};

/// Configuration loader that builds a [`CloudConfig`] from the environment
/// and explicit overrides.
#[derive(Default)]
pub struct ConfigLoader {
    auth_url: Option<String>,
    username: Option<String>,
    user_id: Option<String>,
    password: Option<SecretString>,
    user_domain_id: Option<String>,
    user_domain_name: Option<String>,
    project_id: Option<String>,
    project_name: Option<String>,
    project_domain_id: Option<String>,
    project_domain_name: Option<String>,
    domain_id: Option<String>,
    domain_name: Option<String>,
    application_credential_id: Option<String>,
    application_credential_name: Option<String>,
    application_credential_secret: Option<SecretString>,
    token: Option<SecretString>,
    region: Option<String>,
    interface: Option<Interface>,
    skip_verify: Option<bool>,
}

/// Generates `fill_*` setters that only apply a value when none is set yet.
macro_rules! fill_setters {
    ($($method:ident => $field:ident: $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $method(&mut self, value: Option<$ty>) {
                if self.$field.is_none() {
                    self.$field = value;
                }
            }
        )*
    };
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read `OS_*` environment variables into any field not already set.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_auth_url(mut self, url: String) -> Self {
        self.auth_url = Some(url);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_user_id(mut self, user_id: String) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_user_domain_name(mut self, domain: String) -> Self {
        self.user_domain_name = Some(domain);
        self
    }

    pub fn with_project_id(mut self, project_id: String) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_project_name(mut self, project_name: String) -> Self {
        self.project_name = Some(project_name);
        self
    }

    pub fn with_project_domain_name(mut self, domain: String) -> Self {
        self.project_domain_name = Some(domain);
        self
    }

    pub fn with_application_credential(mut self, id: String, secret: String) -> Self {
        self.application_credential_id = Some(id);
        self.application_credential_secret = Some(SecretString::new(secret.into()));
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_region(mut self, region: String) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_interface(mut self, interface: Interface) -> Self {
        self.interface = Some(interface);
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    fill_setters! {
        fill_auth_url => auth_url: String,
        fill_username => username: String,
        fill_user_id => user_id: String,
        fill_password => password: SecretString,
        fill_user_domain_id => user_domain_id: String,
        fill_user_domain_name => user_domain_name: String,
        fill_project_id => project_id: String,
        fill_project_name => project_name: String,
        fill_project_domain_id => project_domain_id: String,
        fill_project_domain_name => project_domain_name: String,
        fill_domain_id => domain_id: String,
        fill_domain_name => domain_name: String,
        fill_application_credential_id => application_credential_id: String,
        fill_application_credential_name => application_credential_name: String,
        fill_application_credential_secret => application_credential_secret: SecretString,
        fill_token => token: SecretString,
        fill_region => region: String,
        fill_interface => interface: Interface,
        fill_skip_verify => skip_verify: bool,
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAuthUrl`] if no identity endpoint is set,
    /// [`ConfigError::InvalidAuthUrl`] if it is not an http(s) URL, and
    /// [`ConfigError::MissingAuth`] / [`ConfigError::IncompleteAuth`] if the
    /// credentials do not describe a usable method.
    pub fn build(self) -> Result<CloudConfig, ConfigError> {
        let raw_url = self.auth_url.clone().ok_or(ConfigError::MissingAuthUrl)?;
        let auth_url = normalize_auth_url(&raw_url)?;

        let method = self.resolve_method()?;
        let scope = match method {
            AuthMethod::ApplicationCredential { .. } => Scope::Unscoped,
            _ => self.resolve_scope()?,
        };

        tracing::debug!(
            method = method.name(),
            region = self.region.as_deref().unwrap_or("<any>"),
            "Resolved cloud configuration"
        );

        Ok(CloudConfig {
            auth_url,
            auth: AuthConfig { method, scope },
            region: self.region,
            interface: self.interface.unwrap_or_default(),
            skip_verify: self.skip_verify.unwrap_or(false),
        })
    }

    fn user_domain(&self) -> Option<DomainRef> {
        self.user_domain_id
            .clone()
            .map(DomainRef::Id)
            .or_else(|| self.user_domain_name.clone().map(DomainRef::Name))
    }

    fn resolve_user(&self) -> Result<Option<UserRef>, ConfigError> {
        if let Some(id) = &self.user_id {
            return Ok(Some(UserRef::Id(id.clone())));
        }
        match &self.username {
            Some(name) => {
                let domain = self.user_domain().ok_or(ConfigError::IncompleteAuth {
                    what: "OS_USERNAME",
                    hint: "OS_USER_DOMAIN_NAME or OS_USER_DOMAIN_ID",
                })?;
                Ok(Some(UserRef::Name {
                    name: name.clone(),
                    domain,
                }))
            }
            None => Ok(None),
        }
    }

    fn resolve_method(&self) -> Result<AuthMethod, ConfigError> {
        if let Some(token) = &self.token {
            return Ok(AuthMethod::Token {
                token: token.clone(),
            });
        }

        if let Some(secret) = &self.application_credential_secret {
            let credential = if let Some(id) = &self.application_credential_id {
                ApplicationCredentialRef::Id(id.clone())
            } else if let Some(name) = &self.application_credential_name {
                let user = self.resolve_user()?.ok_or(ConfigError::IncompleteAuth {
                    what: "OS_APPLICATION_CREDENTIAL_NAME",
                    hint: "OS_USERNAME or OS_USER_ID",
                })?;
                ApplicationCredentialRef::Name {
                    name: name.clone(),
                    user,
                }
            } else {
                return Err(ConfigError::IncompleteAuth {
                    what: "OS_APPLICATION_CREDENTIAL_SECRET",
                    hint: "OS_APPLICATION_CREDENTIAL_ID or OS_APPLICATION_CREDENTIAL_NAME",
                });
            };
            return Ok(AuthMethod::ApplicationCredential {
                credential,
                secret: secret.clone(),
            });
        }

        match (self.resolve_user()?, &self.password) {
            (Some(user), Some(password)) => Ok(AuthMethod::Password {
                user,
                password: password.clone(),
            }),
            (Some(_), None) => Err(ConfigError::IncompleteAuth {
                what: "OS_USERNAME",
                hint: "OS_PASSWORD",
            }),
            (None, Some(_)) => Err(ConfigError::IncompleteAuth {
                what: "OS_PASSWORD",
                hint: "OS_USERNAME or OS_USER_ID",
            }),
            (None, None) => Err(ConfigError::MissingAuth),
        }
    }

    fn resolve_scope(&self) -> Result<Scope, ConfigError> {
        if let Some(id) = &self.project_id {
            return Ok(Scope::ProjectId(id.clone()));
        }

        if let Some(name) = &self.project_name {
            let domain = self
                .project_domain_id
                .clone()
                .map(DomainRef::Id)
                .or_else(|| self.project_domain_name.clone().map(DomainRef::Name))
                .or_else(|| self.user_domain())
                .ok_or(ConfigError::IncompleteAuth {
                    what: "OS_PROJECT_NAME",
                    hint: "OS_PROJECT_DOMAIN_NAME or OS_PROJECT_DOMAIN_ID",
                })?;
            return Ok(Scope::ProjectName {
                name: name.clone(),
                domain,
            });
        }

        let domain = self
            .domain_id
            .clone()
            .map(DomainRef::Id)
            .or_else(|| self.domain_name.clone().map(DomainRef::Name));
        Ok(domain.map(Scope::Domain).unwrap_or_default())
    }
}

/// Normalize an identity endpoint so that `{auth_url}/auth/tokens` is the v3 token API.
///
/// - `"https://keystone:5000"` -> `"https://keystone:5000/v3"`
/// - `"https://keystone:5000/v3/"` -> `"https://keystone:5000/v3"`
/// - `"https://cloud/identity"` -> `"https://cloud/identity/v3"`
fn normalize_auth_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidAuthUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidAuthUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    let trimmed = raw.trim_end_matches('/');
    if trimmed.ends_with("/v2.0") {
        return Err(ConfigError::InvalidAuthUrl {
            url: raw.to_string(),
            message: "identity API v2.0 is not supported; use the v3 endpoint".to_string(),
        });
    }

    let suffix = format!("/{IDENTITY_API_VERSION}");
    if trimmed.ends_with(&suffix) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}{suffix}"))
    }
}
