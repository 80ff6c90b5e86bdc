// Shared test helpers for building server state and reading responses.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::Response;
use http_body_util::BodyExt as _;

use ip_lookup::dns::ReverseResolver;
use ip_lookup::geoip::GeoClient;
use ip_lookup::initialization::init_client;
use ip_lookup::server::CorsPolicy;
use ip_lookup::{AppState, Config, LookupService};

/// Reverse resolver returning a fixed answer and counting calls.
pub struct StubResolver {
    answer: Option<String>,
    calls: AtomicUsize,
}

impl StubResolver {
    pub fn answering(answer: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            answer: answer.map(str::to_string),
            calls: AtomicUsize::new(0),
        })
    }

    #[allow(dead_code)] // Used by other test files
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ReverseResolver for StubResolver {
    async fn reverse(&self, _ip: IpAddr) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

/// Reverse resolver that panics, to exercise the internal-failure path.
#[allow(dead_code)] // Used by other test files
pub struct PanickingResolver;

#[async_trait::async_trait]
impl ReverseResolver for PanickingResolver {
    async fn reverse(&self, _ip: IpAddr) -> Option<String> {
        panic!("resolver exploded")
    }
}

/// Builds server state against a mock provider with a 1 second client timeout.
pub fn test_state(
    geo_base_url: &str,
    resolver: Arc<dyn ReverseResolver>,
    cors_origins: &[&str],
) -> AppState {
    let config = Config {
        geo_provider_url: geo_base_url.to_string(),
        timeout_seconds: 1,
        user_agent: "ip_lookup_test/1.0".to_string(),
        ..Default::default()
    };
    let client = init_client(&config).expect("Failed to build test HTTP client");
    let geo = GeoClient::new(client, config.geo_provider_url.clone());

    AppState::new(
        LookupService::new(resolver, geo),
        CorsPolicy::new(cors_origins.iter().map(|o| o.to_string()).collect()),
    )
}

/// Collects a response body and parses it as JSON.
#[allow(dead_code)] // Used by other test files
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Response body should be JSON")
}
