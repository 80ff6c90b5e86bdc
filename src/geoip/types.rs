//! GeoIP data structures.
//!
//! This module defines the normalized metadata extracted from a provider response.

use serde::{Deserialize, Serialize};

/// Approximate location of an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Country name
    pub country: Option<String>,
    /// Region, state or province
    pub region: Option<String>,
    /// City
    pub city: Option<String>,
}

/// Anonymization/hosting flags reported by the provider.
///
/// Every flag defaults to `false` when the provider omits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyFlags {
    /// Hosting/datacenter range
    pub datacenter: bool,
    /// Known proxy
    pub proxy: bool,
    /// Known VPN endpoint
    pub vpn: bool,
    /// Tor exit node
    pub tor: bool,
}

/// Geo and network metadata for one address.
///
/// `GeoMetadata::default()` is the "provider unavailable" value: every
/// field absent, every flag `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoMetadata {
    /// Location fields
    pub geo: GeoLocation,
    /// Autonomous system (e.g. `AS15169`)
    pub asn: Option<String>,
    /// Organization operating the network
    pub isp: Option<String>,
    /// Privacy/hosting flags
    pub flags: PrivacyFlags,
}
