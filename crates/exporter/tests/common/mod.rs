//! Common test utilities for exporter integration tests.
//!
//! A single wiremock server plays Keystone and every catalog service. Tests
//! mount the listing responses they need and build a [`Collector`] with a
//! fixed token configuration pointing at the mock.

use std::time::Duration;

#[allow(unused_imports)]
pub use openstack_client::testing::{load_fixture, load_fixture_with_base, token_fixture_for};
#[allow(unused_imports)]
pub use openstack_exporter::{
    CollectionResult, Collector, CollectorSettings, CredentialSource, KindOutcome, ResourceKind,
    StatusSnapshot,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use openstack_config::CloudConfig;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};

pub const TEST_TOKEN: &str = "gAAAAAB-exporter-token";

pub const ROUTERS_PATH: &str = "/network/v2.0/routers";
pub const LOAD_BALANCERS_PATH: &str = "/network/v2.0/lbaas/loadbalancers";
pub const VOLUMES_PATH: &str = "/volume/v3/p-admin/volumes/detail";
pub const SERVERS_PATH: &str = "/compute/v2.1/servers/detail";

pub fn cloud_config(server: &MockServer) -> CloudConfig {
    CloudConfig::with_token(
        format!("{}/identity/v3", server.uri()),
        SecretString::new("existing-token".to_string().into()),
    )
}

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

/// Mount a single-page listing at `at` returning `body`.
#[allow(dead_code)]
pub async fn mount_listing(server: &MockServer, at: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(at.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// `{"<collection>": [{"id": .., "<field>": status}, ...]}`
#[allow(dead_code)]
pub fn listing(collection: &str, field: &str, statuses: &[&str]) -> Value {
    let items: Vec<Value> = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| json!({"id": format!("{collection}-{i}"), field: status}))
        .collect();
    json!({ collection: items })
}

#[allow(dead_code)]
pub fn settings(kinds: &[ResourceKind]) -> CollectorSettings {
    CollectorSettings {
        request_timeout: Duration::from_secs(5),
        scrape_timeout: Duration::from_secs(10),
        ..CollectorSettings::default()
    }
    .with_kinds(kinds.iter().copied())
}

#[allow(dead_code)]
pub fn collector(server: &MockServer, kinds: &[ResourceKind]) -> Collector {
    Collector::new(CredentialSource::Fixed(cloud_config(server)), settings(kinds))
}

/// Snapshot literal helper.
#[allow(dead_code)]
pub fn snapshot(entries: &[(&str, u64)]) -> StatusSnapshot {
    entries.iter().map(|(s, n)| (*s, *n)).collect()
}
