//! Property-based tests for status aggregation.
//!
//! This module uses proptest to verify:
//! - Count conservation: counts sum to the number of records
//! - Key set equals the distinct statuses observed
//! - Order independence: any permutation yields the same snapshot

use std::collections::BTreeSet;

use openstack_client::{Router, StatusRecord};
use openstack_exporter::aggregate;
use proptest::prelude::*;

fn router(i: usize, status: &str) -> Router {
    serde_json::from_value(serde_json::json!({"id": format!("r-{i}"), "status": status}))
        .expect("router")
}

fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ACTIVE".to_string()),
        Just("DOWN".to_string()),
        Just("ERROR".to_string()),
        Just(String::new()),
        "[A-Z_]{1,12}",
    ]
}

proptest! {
    #[test]
    fn prop_counts_sum_to_record_count(statuses in prop::collection::vec(status_strategy(), 0..200)) {
        let routers: Vec<Router> = statuses.iter().enumerate().map(|(i, s)| router(i, s)).collect();
        let snapshot = aggregate(&routers);
        prop_assert_eq!(snapshot.total(), routers.len() as u64);
    }

    #[test]
    fn prop_keys_are_distinct_statuses(statuses in prop::collection::vec(status_strategy(), 0..200)) {
        let routers: Vec<Router> = statuses.iter().enumerate().map(|(i, s)| router(i, s)).collect();
        let snapshot = aggregate(&routers);

        let observed: BTreeSet<&str> = routers.iter().map(|r| r.status()).collect();
        let keys: BTreeSet<&str> = snapshot.iter().map(|(s, _)| s).collect();
        prop_assert_eq!(keys, observed);
    }

    #[test]
    fn prop_order_independent(
        statuses in prop::collection::vec(status_strategy(), 0..100)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let (original, shuffled) = statuses;
        let a: Vec<Router> = original.iter().enumerate().map(|(i, s)| router(i, s)).collect();
        let b: Vec<Router> = shuffled.iter().enumerate().map(|(i, s)| router(i, s)).collect();
        prop_assert_eq!(aggregate(&a), aggregate(&b));
    }
}
