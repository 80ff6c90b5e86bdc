//! Client address extraction.
//!
//! Determines which address to report for the caller of `GET /ip`:
//! 1. the first valid entry of the `x-forwarded-for` chain (upstream proxies
//!    are trusted),
//! 2. otherwise the connection's peer address, with IPv4-mapped IPv6
//!    addresses reported in plain IPv4 form,
//! 3. otherwise the first non-loopback IPv4 address of this host,
//! 4. otherwise `0.0.0.0`.

mod interfaces;

use std::net::IpAddr;

use axum::http::HeaderMap;

use crate::config::{FORWARDED_FOR_HEADER, UNSPECIFIED_ADDRESS};

/// Returns the caller's address as a string. Never fails.
pub fn extract_client_ip(headers: &HeaderMap, remote: Option<IpAddr>) -> String {
    if let Some(forwarded) = first_forwarded_ip(headers) {
        return forwarded;
    }

    if let Some(remote) = remote {
        return remote.to_canonical().to_string();
    }

    interfaces::first_external_ipv4()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| UNSPECIFIED_ADDRESS.to_string())
}

/// First syntactically valid address in the forwarding chain, as written.
///
/// Repeated `x-forwarded-for` headers are treated as one chain in arrival order.
pub fn first_forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(FORWARDED_FOR_HEADER)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .find(|entry| entry.parse::<IpAddr>().is_ok())
        .map(str::to_string)
}
