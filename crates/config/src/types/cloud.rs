//! Connection configuration for an OpenStack cloud.
//!
//! Responsibilities:
//! - Define the resolved cloud connection settings (auth URL, auth, region, interface).
//! - Parse endpoint interface names as they appear in `OS_INTERFACE`.
//!
//! Does NOT handle:
//! - Loading from the environment (see `loader` module).
//! - Actual network connections (see client crate).

use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;

use crate::types::auth::{AuthConfig, AuthMethod, Scope};

/// Endpoint interface selected from the service catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interface {
    #[default]
    Public,
    Internal,
    Admin,
}

impl Interface {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interface {
    type Err = String;

    /// Accepts both the v3 names and the legacy `publicURL` style.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" | "publicurl" => Ok(Self::Public),
            "internal" | "internalurl" => Ok(Self::Internal),
            "admin" | "adminurl" => Ok(Self::Admin),
            other => Err(format!(
                "unknown interface '{other}' (expected public, internal or admin)"
            )),
        }
    }
}

/// Everything needed to authenticate against a cloud and locate its services.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// Identity endpoint, normalized to end with `/v3` and without trailing slash.
    pub auth_url: String,
    pub auth: AuthConfig,
    /// Region used to filter catalog endpoints. `None` matches any region.
    pub region: Option<String>,
    pub interface: Interface,
    /// Whether to skip TLS verification (for self-signed certificates).
    pub skip_verify: bool,
}

impl CloudConfig {
    /// Config for a token-authenticated, unscoped session. Mostly useful in tests.
    pub fn with_token(auth_url: String, token: SecretString) -> Self {
        Self {
            auth_url,
            auth: AuthConfig {
                method: AuthMethod::Token { token },
                scope: Scope::Unscoped,
            },
            region: None,
            interface: Interface::Public,
            skip_verify: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_parsing() {
        assert_eq!("public".parse::<Interface>().unwrap(), Interface::Public);
        assert_eq!("internalURL".parse::<Interface>().unwrap(), Interface::Internal);
        assert_eq!("ADMIN".parse::<Interface>().unwrap(), Interface::Admin);
        assert!("private".parse::<Interface>().is_err());
    }

    #[test]
    fn test_interface_display() {
        assert_eq!(Interface::Internal.to_string(), "internal");
    }
}
