//! Resource listing tests for each service.
//!
//! # Invariants
//! - Volumes and servers are listed with `all_tenants=true` when asked
//! - Load balancers report `provisioning_status` as their status
//! - A null status decodes to the empty string

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_list_load_balancers() {
    let server = MockServer::start().await;
    let session = session_for(&server).await;

    Mock::given(method("GET"))
        .and(path("/network/v2.0/lbaas/loadbalancers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("network/loadbalancers.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let lbs = session
        .network()
        .list_load_balancers(&ListFilters::default())
        .await
        .unwrap();

    let statuses: Vec<&str> = lbs.iter().map(|lb| lb.status()).collect();
    assert_eq!(statuses, vec!["ACTIVE", "PENDING_UPDATE", ""]);
    assert_eq!(lbs[0].operating_status, "ONLINE");
}

#[tokio::test]
async fn test_list_volumes_all_tenants() {
    let server = MockServer::start().await;
    let session = session_for(&server).await;

    Mock::given(method("GET"))
        .and(path("/volume/v3/p-admin/volumes/detail"))
        .and(query_param("all_tenants", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("block_storage/volumes.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let volumes = session
        .block_storage()
        .list_volumes(&ListFilters::all_tenants())
        .await
        .unwrap();

    assert_eq!(volumes.len(), 3);
    assert_eq!(volumes[0].status(), "in-use");
    assert_eq!(volumes[0].size, Some(100));
    assert_eq!(volumes[2].name, "");
    assert_eq!(volumes[1].tenant_id.as_deref(), Some("p-2"));
}

#[tokio::test]
async fn test_list_servers_all_tenants() {
    let server = MockServer::start().await;
    let session = session_for(&server).await;

    Mock::given(method("GET"))
        .and(path("/compute/v2.1/servers/detail"))
        .and(query_param("all_tenants", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("compute/servers.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let servers = session
        .compute()
        .list_servers(&ListFilters::all_tenants())
        .await
        .unwrap();

    let statuses: Vec<&str> = servers.iter().map(|s| s.status()).collect();
    assert_eq!(statuses, vec!["ACTIVE", "SHUTOFF", "ACTIVE"]);
}

#[tokio::test]
async fn test_forbidden_listing_is_auth_error() {
    let server = MockServer::start().await;
    let session = session_for(&server).await;

    Mock::given(method("GET"))
        .and(path("/compute/v2.1/servers/detail"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-Compute-Request-Id", "req-nova-1")
                .set_body_json(serde_json::json!({
                    "forbidden": {
                        "code": 403,
                        "message": "Policy doesn't allow os_compute_api:servers:detail:get_all_tenants to be performed."
                    }
                })),
        )
        .mount(&server)
        .await;

    let err = session
        .compute()
        .list_servers(&ListFilters::all_tenants())
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    match err {
        ClientError::ApiError {
            message,
            request_id,
            ..
        } => {
            assert!(message.starts_with("Policy doesn't allow"));
            assert_eq!(request_id.as_deref(), Some("req-nova-1"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_neutron_error_message() {
    let server = MockServer::start().await;
    let session = session_for(&server).await;

    Mock::given(method("GET"))
        .and(path("/network/v2.0/lbaas/loadbalancers"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "NeutronError": {
                "type": "HTTPNotFound",
                "message": "The resource could not be found.",
                "detail": ""
            }
        })))
        .mount(&server)
        .await;

    let err = session
        .network()
        .list_load_balancers(&ListFilters::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("The resource could not be found."));
}
