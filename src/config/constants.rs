//! Configuration constants.
//!
//! Defaults for the service configuration plus the fixed strings used on the
//! HTTP surface (header names, CORS values, error messages).

// Listener defaults
/// Listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Listen port.
pub const DEFAULT_PORT: u16 = 8080;

// CORS
/// Allow-list entry that admits every origin.
pub const CORS_WILDCARD: &str = "*";
/// Allow-list used when none is configured.
pub const DEFAULT_CORS_ORIGINS: &str = CORS_WILDCARD;
/// Value of `Access-Control-Allow-Methods`.
pub const CORS_ALLOW_METHODS: &str = "GET,OPTIONS";
/// Value of `Access-Control-Allow-Headers`.
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

// Geo provider
/// Base URL of the IP-intelligence provider. Lookups go to `<base>/<ip>/json/`.
pub const DEFAULT_GEO_PROVIDER_URL: &str = "https://ipapi.co";

// Network operation timeouts
/// Whole-request timeout for the geo provider call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout for the geo provider, in seconds.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// DNS query timeout in seconds.
/// Reverse lookups for unroutable ranges often never answer, so fail fast.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// DNS query attempts before giving up.
pub const DNS_ATTEMPTS: usize = 2;

/// Default User-Agent for outbound provider requests.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_lookup/", env!("CARGO_PKG_VERSION"));

// Client address extraction
/// Proxy chain header, first hop closest to the client.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
/// Reported when no client address can be determined at all.
pub const UNSPECIFIED_ADDRESS: &str = "0.0.0.0";

// Response messages
/// Message for `LookupError::InvalidInput`.
pub const MSG_INVALID_IP: &str = "Invalid IP address";
/// Message for a missing or malformed `ip` query parameter.
pub const MSG_INVALID_IP_PARAMETER: &str = "Invalid or missing ip parameter";
/// Message for internal failures that carry no description.
pub const MSG_LOOKUP_FAILED: &str = "Lookup failed";
/// Message for unknown routes.
pub const MSG_NOT_FOUND: &str = "Not found";
