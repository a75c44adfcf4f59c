//! Centralized constants for the exporter workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// HTTP Listener Defaults
// =============================================================================

/// Default port the exporter listens on.
pub const DEFAULT_EXPORTER_PORT: u16 = 9401;

/// Default listen address for the scrape endpoint.
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:9401";

/// Default path under which metrics are exposed.
pub const DEFAULT_TELEMETRY_PATH: &str = "/metrics";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default timeout for a single API request (one page) in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default deadline for a whole collection pass in seconds.
pub const DEFAULT_SCRAPE_TIMEOUT_SECS: u64 = 60;

/// Maximum allowed timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Largest page size accepted for `limit` query parameters.
pub const MAX_PAGE_SIZE: usize = 10_000;

// =============================================================================
// Identity Defaults
// =============================================================================

/// Identity API version path segment appended to the auth URL.
pub const IDENTITY_API_VERSION: &str = "v3";

/// Header carrying the issued Keystone token.
pub const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";

/// Header used to authenticate API requests.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
