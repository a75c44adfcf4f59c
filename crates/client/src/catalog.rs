//! Service catalog endpoint resolution.
//!
//! Invariants:
//! - A service resolves only when exactly one endpoint matches its type,
//!   interface and region.
//! - Returned URLs never end with a trailing slash.

use openstack_config::Interface;

use crate::error::{ClientError, Result};
use crate::models::CatalogEntry;

/// Resolve the endpoint URL for the first of `service_types` present in the catalog.
///
/// Candidate types are tried in order; a type with no matching endpoint falls
/// through to the next one. A type with several matches is an error right away.
pub(crate) fn resolve_endpoint(
    catalog: &[CatalogEntry],
    service_types: &[&str],
    interface: Interface,
    region: Option<&str>,
) -> Result<String> {
    for service_type in service_types {
        let matches: Vec<&str> = catalog
            .iter()
            .filter(|entry| entry.service_type == *service_type)
            .flat_map(|entry| entry.endpoints.iter())
            .filter(|ep| ep.interface.eq_ignore_ascii_case(interface.as_str()))
            .filter(|ep| ep.in_region(region))
            .map(|ep| ep.url.as_str())
            .collect();

        match matches.as_slice() {
            [] => continue,
            [url] => return Ok(url.trim_end_matches('/').to_string()),
            _ => {
                return Err(ClientError::AmbiguousEndpoint {
                    service: (*service_type).to_string(),
                    count: matches.len(),
                });
            }
        }
    }

    Err(ClientError::EndpointNotFound {
        service: service_types.join("|"),
        interface: interface.to_string(),
        region: region.unwrap_or("*").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogEntry> {
        serde_json::from_value(serde_json::json!([
            {
                "type": "compute",
                "name": "nova",
                "endpoints": [
                    {"interface": "public", "region": "RegionOne", "region_id": "RegionOne", "url": "http://nova.one/v2.1/"},
                    {"interface": "internal", "region": "RegionOne", "region_id": "RegionOne", "url": "http://nova.internal/v2.1"},
                    {"interface": "public", "region": "RegionTwo", "region_id": "RegionTwo", "url": "http://nova.two/v2.1"}
                ]
            },
            {
                "type": "volumev2",
                "name": "cinderv2",
                "endpoints": [
                    {"interface": "public", "region_id": "RegionOne", "url": "http://cinder/v2/p1"}
                ]
            },
            {
                "type": "volumev3",
                "name": "cinderv3",
                "endpoints": [
                    {"interface": "public", "region_id": "RegionTwo", "url": "http://cinder/v3/p1"}
                ]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_resolves_by_interface_and_region() {
        let url =
            resolve_endpoint(&catalog(), &["compute"], Interface::Public, Some("RegionOne"))
                .unwrap();
        assert_eq!(url, "http://nova.one/v2.1");

        let url =
            resolve_endpoint(&catalog(), &["compute"], Interface::Internal, None).unwrap();
        assert_eq!(url, "http://nova.internal/v2.1");
    }

    #[test]
    fn test_multiple_matches_is_ambiguous() {
        let err = resolve_endpoint(&catalog(), &["compute"], Interface::Public, None).unwrap_err();
        assert!(matches!(
            err,
            ClientError::AmbiguousEndpoint { count: 2, .. }
        ));
    }

    #[test]
    fn test_falls_through_service_types_in_order() {
        let types = ["volumev3", "volumev2", "block-storage"];
        let url =
            resolve_endpoint(&catalog(), &types, Interface::Public, Some("RegionOne")).unwrap();
        assert_eq!(url, "http://cinder/v2/p1");

        let url =
            resolve_endpoint(&catalog(), &types, Interface::Public, Some("RegionTwo")).unwrap();
        assert_eq!(url, "http://cinder/v3/p1");
    }

    #[test]
    fn test_missing_service_is_not_found() {
        let err =
            resolve_endpoint(&catalog(), &["network"], Interface::Public, None).unwrap_err();
        assert!(matches!(err, ClientError::EndpointNotFound { .. }));
    }
}
