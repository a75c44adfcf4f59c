//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the standard `OS_*` variables used by OpenStack client tooling.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final CloudConfig (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - When a variable has a legacy alias (`OS_TENANT_*`), the current name wins.

use secrecy::SecretString;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::Interface;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// First non-empty value among `keys`, in order.
fn first_env_var(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env_var_or_none(key))
}

fn secret_env_var(key: &str) -> Option<SecretString> {
    env_var_or_none(key).map(|v| SecretString::new(v.into()))
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
///
/// Values already set through builder methods are kept; the environment only
/// fills gaps.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    loader.fill_auth_url(env_var_or_none("OS_AUTH_URL"));

    loader.fill_username(env_var_or_none("OS_USERNAME"));
    loader.fill_user_id(env_var_or_none("OS_USER_ID").or_else(|| env_var_or_none("OS_USERID")));
    loader.fill_password(secret_env_var("OS_PASSWORD"));
    loader.fill_user_domain_id(first_env_var(&["OS_USER_DOMAIN_ID", "OS_DOMAIN_ID"]));
    loader.fill_user_domain_name(first_env_var(&["OS_USER_DOMAIN_NAME", "OS_DOMAIN_NAME"]));

    loader.fill_project_id(first_env_var(&["OS_PROJECT_ID", "OS_TENANT_ID"]));
    loader.fill_project_name(first_env_var(&["OS_PROJECT_NAME", "OS_TENANT_NAME"]));
    loader.fill_project_domain_id(env_var_or_none("OS_PROJECT_DOMAIN_ID"));
    loader.fill_project_domain_name(env_var_or_none("OS_PROJECT_DOMAIN_NAME"));
    loader.fill_domain_id(env_var_or_none("OS_DOMAIN_ID"));
    loader.fill_domain_name(env_var_or_none("OS_DOMAIN_NAME"));

    loader.fill_application_credential_id(env_var_or_none("OS_APPLICATION_CREDENTIAL_ID"));
    loader.fill_application_credential_name(env_var_or_none("OS_APPLICATION_CREDENTIAL_NAME"));
    loader.fill_application_credential_secret(secret_env_var("OS_APPLICATION_CREDENTIAL_SECRET"));

    loader.fill_token(secret_env_var("OS_TOKEN"));
    loader.fill_region(first_env_var(&["OS_REGION_NAME", "OS_REGION"]));

    if let Some(interface) = first_env_var(&["OS_INTERFACE", "OS_ENDPOINT_TYPE"]) {
        let parsed: Interface =
            interface
                .parse()
                .map_err(|message: String| ConfigError::InvalidValue {
                    var: "OS_INTERFACE".to_string(),
                    message,
                })?;
        loader.fill_interface(Some(parsed));
    }

    if let Some(insecure) = env_var_or_none("OS_INSECURE") {
        loader.fill_skip_verify(Some(parse_bool("OS_INSECURE", &insecure)?));
    }

    Ok(())
}
