//! Testing utilities for OpenStack client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use openstack_client::testing::load_fixture;
//!
//! let token = load_fixture("identity/token.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "network/routers_page1.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture, substituting `base_url` for every `{base}` placeholder.
///
/// Catalog and pagination URLs in fixtures use the placeholder so one mock
/// server can stand in for every service.
pub fn load_fixture_with_base(fixture_path: &str, base_url: &str) -> serde_json::Value {
    let raw = load_fixture(fixture_path).to_string();
    serde_json::from_str(&raw.replace("{base}", base_url)).expect("Invalid JSON in fixture")
}

/// The standard token response with its catalog pointing at `base_url`.
pub fn token_fixture_for(base_url: &str) -> serde_json::Value {
    load_fixture_with_base("identity/token.json", base_url)
}
