//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every test starts from an environment with all `OS_*` variables unset.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads.
const OS_VARS: &[&str] = &[
    "OS_AUTH_URL",
    "OS_USERNAME",
    "OS_USER_ID",
    "OS_USERID",
    "OS_PASSWORD",
    "OS_USER_DOMAIN_ID",
    "OS_USER_DOMAIN_NAME",
    "OS_DOMAIN_ID",
    "OS_DOMAIN_NAME",
    "OS_PROJECT_ID",
    "OS_TENANT_ID",
    "OS_PROJECT_NAME",
    "OS_TENANT_NAME",
    "OS_PROJECT_DOMAIN_ID",
    "OS_PROJECT_DOMAIN_NAME",
    "OS_APPLICATION_CREDENTIAL_ID",
    "OS_APPLICATION_CREDENTIAL_NAME",
    "OS_APPLICATION_CREDENTIAL_SECRET",
    "OS_TOKEN",
    "OS_REGION_NAME",
    "OS_REGION",
    "OS_INTERFACE",
    "OS_ENDPOINT_TYPE",
    "OS_INSECURE",
];

/// Run `f` with exactly `vars` set among the `OS_*` variables.
pub fn with_os_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(&str, Option<&str>)> = OS_VARS.iter().map(|k| (*k, None)).collect();
    for (key, value) in vars {
        match all.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = Some(*value),
            None => all.push((*key, Some(*value))),
        }
    }
    temp_env::with_vars(all, f)
}
