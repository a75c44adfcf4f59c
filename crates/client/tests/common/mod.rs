//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the OpenStack client against a wiremock server that
//! plays Keystone and every catalog service at once.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Catalog URLs in fixtures resolve to the mock server's URI
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use openstack_client::testing::{load_fixture, load_fixture_with_base, token_fixture_for};

#[allow(unused_imports)]
pub use openstack_client::{ClientError, ListFilters, OpenStackClient, Session, StatusRecord};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use openstack_config::CloudConfig;
use secrecy::SecretString;
use wiremock::matchers::{method, path};

pub const TEST_TOKEN: &str = "gAAAAAB-test-token";

/// Token-method cloud config pointing at the mock server's `/identity/v3`.
#[allow(dead_code)]
pub fn cloud_config(server: &MockServer) -> CloudConfig {
    CloudConfig::with_token(
        format!("{}/identity/v3", server.uri()),
        SecretString::new("existing-token".to_string().into()),
    )
}

/// Mount a successful Keystone token response.
#[allow(dead_code)]
pub async fn mount_keystone(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/identity/v3/auth/tokens"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TEST_TOKEN)
                .set_body_json(token_fixture_for(&server.uri())),
        )
        .mount(server)
        .await;
}

/// Build a client for `server` and authenticate.
#[allow(dead_code)]
pub async fn session_for(server: &MockServer) -> Session {
    mount_keystone(server).await;
    OpenStackClient::builder()
        .from_config(&cloud_config(server))
        .request_timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
        .authenticate()
        .await
        .expect("authentication should succeed")
}
