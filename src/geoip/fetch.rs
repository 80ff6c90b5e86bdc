//! Geo provider requests.
//!
//! One GET per lookup to `<base>/<ip>/json/`. `fetch_record` reports every
//! failure; `fetch_metadata` is the always-ok wrapper the orchestrator uses.

use std::net::IpAddr;
use std::sync::Arc;

use serde_json::Value;

use super::extract::extract_metadata;
use super::types::GeoMetadata;
use crate::error_handling::GeoFetchError;

/// Client for a JSON IP-intelligence provider.
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl GeoClient {
    /// Creates a provider client. A trailing slash on `base_url` is ignored.
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Provider URL for one address.
    pub fn endpoint(&self, ip: IpAddr) -> String {
        format!("{}/{}/json/", self.base_url, ip)
    }

    /// Requests and parses the provider's JSON body for `ip`.
    ///
    /// # Errors
    ///
    /// - `RequestError` on transport failures and client timeouts
    /// - `StatusError` on non-2xx responses
    /// - `DecodeError` when the body is not valid JSON
    pub async fn fetch_record(&self, ip: IpAddr) -> Result<Value, GeoFetchError> {
        let response = self.client.get(self.endpoint(ip)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoFetchError::StatusError(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches and normalizes metadata for `ip`, folding any failure into `None`.
    pub async fn fetch_metadata(&self, ip: IpAddr) -> Option<GeoMetadata> {
        match self.fetch_record(ip).await {
            Ok(body) => Some(extract_metadata(&body)),
            Err(e) => {
                log::warn!("Geo lookup for {ip} unavailable: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GeoClient {
        GeoClient::new(Arc::new(reqwest::Client::new()), base)
    }

    #[test]
    fn test_endpoint_ipv4() {
        let geo = client("https://ipapi.co");
        let ip: IpAddr = "203.0.113.5".parse().unwrap();
        assert_eq!(geo.endpoint(ip), "https://ipapi.co/203.0.113.5/json/");
    }

    #[test]
    fn test_endpoint_ipv6() {
        let geo = client("https://ipapi.co");
        let ip: IpAddr = "2001:db8::1".parse().unwrap();
        assert_eq!(geo.endpoint(ip), "https://ipapi.co/2001:db8::1/json/");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let geo = client("http://127.0.0.1:9999/");
        assert_eq!(geo.base_url(), "http://127.0.0.1:9999");
        let ip: IpAddr = "192.0.2.1".parse().unwrap();
        assert_eq!(geo.endpoint(ip), "http://127.0.0.1:9999/192.0.2.1/json/");
    }

    #[tokio::test]
    async fn test_unreachable_provider_yields_none() {
        // Port 9 (discard) is closed on test hosts, so the connect is refused
        let geo = client("http://127.0.0.1:9");
        let ip: IpAddr = "192.0.2.1".parse().unwrap();

        assert!(matches!(
            geo.fetch_record(ip).await,
            Err(GeoFetchError::RequestError(_))
        ));
        assert_eq!(geo.fetch_metadata(ip).await, None);
    }
}
