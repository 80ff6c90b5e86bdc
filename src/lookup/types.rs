//! Lookup result types.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::geoip::{GeoLocation, GeoMetadata, PrivacyFlags};

/// IP protocol version, serialized as the bare number `4` or `6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum IpVersion {
    /// IPv4
    V4 = 4,
    /// IPv6
    V6 = 6,
}

impl From<IpAddr> for IpVersion {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => IpVersion::V4,
            IpAddr::V6(_) => IpVersion::V6,
        }
    }
}

/// Normalized enrichment record for one queried address.
///
/// `geo`, `asn`, `isp` and `flags` are always serialized, with `null`/`false`
/// contents when the provider had nothing; `reverse` is `null` when the PTR
/// lookup produced no hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// The queried address, as given
    pub ip: String,
    /// Address family of `ip`
    pub version: IpVersion,
    /// PTR hostname
    pub reverse: Option<String>,
    /// Provider location data
    pub geo: GeoLocation,
    /// Provider autonomous system
    pub asn: Option<String>,
    /// Provider network operator
    pub isp: Option<String>,
    /// Provider privacy/hosting flags
    pub flags: PrivacyFlags,
}

impl LookupResult {
    /// Merges the two sub-lookup outcomes. `None` metadata means the provider
    /// was unavailable and yields all-absent fields.
    pub fn assemble(
        input: &str,
        ip: IpAddr,
        reverse: Option<String>,
        metadata: Option<GeoMetadata>,
    ) -> Self {
        let GeoMetadata {
            geo,
            asn,
            isp,
            flags,
        } = metadata.unwrap_or_default();

        Self {
            ip: input.to_string(),
            version: IpVersion::from(ip),
            reverse,
            geo,
            asn,
            isp,
            flags,
        }
    }
}
