//! Resource kinds and their listing filters.

use std::fmt;
use std::str::FromStr;

use openstack_client::ListFilters;

/// A kind of OpenStack resource whose statuses are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    Router,
    Volume,
    LoadBalancer,
    Server,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Router,
        ResourceKind::Volume,
        ResourceKind::LoadBalancer,
        ResourceKind::Server,
    ];

    /// Kinds collected when none are configured. Listing servers across all
    /// projects is expensive on large clouds, so it is opt-in.
    pub const DEFAULT_ENABLED: [ResourceKind; 3] = [
        ResourceKind::Router,
        ResourceKind::Volume,
        ResourceKind::LoadBalancer,
    ];

    /// Metric subsystem, also used as the `collector` label value.
    pub const fn subsystem(self) -> &'static str {
        match self {
            Self::Router => "router",
            Self::Volume => "volume",
            Self::LoadBalancer => "lb",
            Self::Server => "server",
        }
    }

    /// Name of the per-status gauge for this kind.
    pub const fn status_metric(self) -> &'static str {
        match self {
            Self::Router => "openstack_router_status_total",
            Self::Volume => "openstack_volume_status_total",
            Self::LoadBalancer => "openstack_lb_status_total",
            Self::Server => "openstack_server_status_total",
        }
    }

    /// Filters sent with the first listing request. Identical on every pass.
    pub fn filters(self) -> ListFilters {
        match self {
            Self::Router | Self::LoadBalancer => ListFilters::default(),
            Self::Volume | Self::Server => ListFilters::all_tenants(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subsystem())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "router" | "routers" => Ok(Self::Router),
            "volume" | "volumes" => Ok(Self::Volume),
            "lb" | "loadbalancer" | "loadbalancers" | "load_balancer" => Ok(Self::LoadBalancer),
            "server" | "servers" => Ok(Self::Server),
            other => Err(format!(
                "unknown collector '{other}' (expected router, volume, lb or server)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("lb".parse::<ResourceKind>().unwrap(), ResourceKind::LoadBalancer);
        assert_eq!("Volumes".parse::<ResourceKind>().unwrap(), ResourceKind::Volume);
        assert_eq!(" server ".parse::<ResourceKind>().unwrap(), ResourceKind::Server);
        assert!("network".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.to_string().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_server_is_not_enabled_by_default() {
        assert!(!ResourceKind::DEFAULT_ENABLED.contains(&ResourceKind::Server));
    }

    #[test]
    fn test_filters() {
        assert!(!ResourceKind::Router.filters().all_tenants);
        assert!(!ResourceKind::LoadBalancer.filters().all_tenants);
        assert!(ResourceKind::Volume.filters().all_tenants);
        assert!(ResourceKind::Server.filters().all_tenants);
    }
}
