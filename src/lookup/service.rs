//! Lookup orchestration.

use std::net::IpAddr;
use std::sync::Arc;

use super::types::LookupResult;
use crate::dns::ReverseResolver;
use crate::error_handling::LookupError;
use crate::geoip::GeoClient;

/// Parses `input` as an IPv4 or IPv6 address.
///
/// # Errors
///
/// Returns `LookupError::InvalidInput` for anything that is not a well-formed
/// address. Surrounding whitespace is not accepted.
pub fn parse_ip(input: &str) -> Result<IpAddr, LookupError> {
    input.parse().map_err(|_| LookupError::InvalidInput)
}

/// Combines reverse DNS and geo provider data for a queried address.
///
/// Cheap to clone; the resolver and HTTP client are shared.
#[derive(Clone)]
pub struct LookupService {
    resolver: Arc<dyn ReverseResolver>,
    geo: GeoClient,
}

impl LookupService {
    /// Creates a service from a resolver and a provider client.
    pub fn new(resolver: Arc<dyn ReverseResolver>, geo: GeoClient) -> Self {
        Self { resolver, geo }
    }

    /// Looks up `input`.
    ///
    /// The PTR lookup and the provider request run concurrently and both are
    /// awaited to completion; a failure in either only blanks its own fields.
    /// Nothing is requested when `input` is not a valid address.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidInput` if `input` is not an IP address.
    pub async fn lookup(&self, input: &str) -> Result<LookupResult, LookupError> {
        let ip = parse_ip(input)?;
        log::debug!("Looking up {ip}");

        let (reverse, metadata) =
            tokio::join!(self.resolver.reverse(ip), self.geo.fetch_metadata(ip));

        Ok(LookupResult::assemble(input, ip, reverse, metadata))
    }
}
